use super::*;

#[test]
fn disabled_blur_leaves_layer_untouched() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    for blur in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let mut layer = src.clone();
        blur_premul_in_place(&mut layer, 1, 2, blur).unwrap();
        assert_eq!(layer, src, "blur {blur}");
    }
    assert!(GaussianKernel::for_blur(0.0).is_none());
}

#[test]
fn kernel_spans_three_sigma_and_sums_to_one() {
    for (blur, radius) in [(0.5, 2usize), (1.0, 3), (2.0, 6), (10.0, 30)] {
        let k = GaussianKernel::for_blur(blur).unwrap();
        assert_eq!(k.radius(), radius);
        assert_eq!(k.weights().len(), 2 * radius + 1);
        assert_eq!(k.weights().iter().map(|&w| u64::from(w)).sum::<u64>(), 65536);
    }
}

#[test]
fn kernel_is_symmetric_and_peaks_in_the_middle() {
    let k = GaussianKernel::for_blur(2.0).unwrap();
    let w = k.weights();
    let mid = k.radius();
    for i in 0..mid {
        assert!(w[i].abs_diff(w[w.len() - 1 - i]) <= 1, "tap {i}");
        assert!(w[i] <= w[i + 1]);
    }
}

#[test]
fn constant_layer_is_unchanged() {
    let (w, h) = (4u32, 3u32);
    let src = [10u8, 20, 30, 40].repeat((w * h) as usize);
    let mut layer = src.clone();
    blur_premul_in_place(&mut layer, w, h, 1.0).unwrap();
    assert_eq!(layer, src);
}

#[test]
fn single_pixel_energy_spreads_and_is_conserved() {
    let (w, h) = (9u32, 9u32);
    let mut layer = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    layer[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    blur_premul_in_place(&mut layer, w, h, 1.0).unwrap();

    let nonzero = layer.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);
    let sum_a: i32 = layer.chunks_exact(4).map(|px| i32::from(px[3])).sum();
    assert!((sum_a - 255).abs() <= 8, "sum {sum_a}");
}

#[test]
fn full_width_row_spreads_only_vertically() {
    let (w, h) = (6u32, 9u32);
    let mut layer = vec![0u8; (w * h * 4) as usize];
    let row = (4 * w * 4) as usize;
    layer[row..row + (w * 4) as usize].fill(200);

    blur_premul_in_place(&mut layer, w, h, 1.0).unwrap();

    for y in 0..h as usize {
        let line = &layer[y * (w as usize) * 4..(y + 1) * (w as usize) * 4];
        assert!(line.chunks_exact(4).all(|px| px == &line[..4]), "row {y}");
    }
    let alpha_at = |y: usize| layer[y * (w as usize) * 4 + 3];
    assert!(alpha_at(4) < 200);
    assert!(alpha_at(3) > 0 && alpha_at(5) > 0);
    assert!(alpha_at(3).abs_diff(alpha_at(5)) <= 1);
}

#[test]
fn mismatched_layer_is_rejected() {
    let mut layer = [0u8; 12];
    assert!(matches!(
        blur_premul_in_place(&mut layer, 2, 2, 1.0),
        Err(BgError::Render(_))
    ));
}

#[test]
fn scratch_buffer_is_reused_across_sizes() {
    let mut scratch = Vec::new();
    let mut big = vec![0u8; 8 * 8 * 4];
    blur_with_scratch(&mut big, &mut scratch, 8, 8, 2.0).unwrap();
    let mut small = [255u8; 2 * 2 * 4].to_vec();
    blur_with_scratch(&mut small, &mut scratch, 2, 2, 2.0).unwrap();
    assert_eq!(small, vec![255u8; 16]);
}

use super::canvas::Surface;

/// Copies `src` into a `dst_w × dst_h` presentation buffer.
///
/// Equal sizes are a straight copy. Otherwise every destination pixel takes
/// the nearest source pixel, so the surface always fills the window.
pub fn blit_scaled(src: &Surface, dst: &mut [u32], dst_w: usize, dst_h: usize) {
    let (src_w, src_h) = (src.width() as usize, src.height() as usize);
    if dst_w == 0 || dst_h == 0 || src_w == 0 || src_h == 0 {
        return;
    }
    let needed = dst_w * dst_h;
    if dst.len() < needed {
        log::warn!("presentation buffer too small: {} < {needed}", dst.len());
        return;
    }

    let pixels = src.pixels();

    if src_w == dst_w && src_h == dst_h {
        dst[..needed].copy_from_slice(pixels);
        return;
    }

    for y in 0..dst_h {
        let sy = y * src_h / dst_h;
        let src_row = &pixels[sy * src_w..(sy + 1) * src_w];
        let dst_row = &mut dst[y * dst_w..(y + 1) * dst_w];
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[x * src_w / dst_w];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;

    #[test]
    fn equal_size_is_exact_copy() {
        let mut src = Surface::new(3, 2);
        src.set_pixel(1, 1, Color::RED);

        let mut dst = vec![0xFFFF_FFFF; 6];
        blit_scaled(&src, &mut dst, 3, 2);
        assert_eq!(dst.as_slice(), src.pixels());
    }

    #[test]
    fn upscale_doubles_each_pixel() {
        let mut src = Surface::new(2, 1);
        src.set_pixel(1, 0, Color::WHITE);

        let mut dst = vec![0; 4 * 2];
        blit_scaled(&src, &mut dst, 4, 2);

        let w = Color::WHITE.to_pixel();
        assert_eq!(dst, vec![0, 0, w, w, 0, 0, w, w]);
    }

    #[test]
    fn downscale_covers_every_destination_pixel() {
        let mut src = Surface::new(4, 4);
        src.fill(Color::GREEN);

        let mut dst = vec![0; 3 * 3];
        blit_scaled(&src, &mut dst, 3, 3);
        assert!(dst.iter().all(|&p| p == Color::GREEN.to_pixel()));
    }

    #[test]
    fn short_destination_is_left_untouched() {
        let src = Surface::new(4, 4);
        let mut dst = vec![7; 3];
        blit_scaled(&src, &mut dst, 4, 4);
        assert_eq!(dst, vec![7, 7, 7]);
    }
}

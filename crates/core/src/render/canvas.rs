//! Minimal RGBA raster canvas with source-over compositing.
//!
//! This is all the renderer needs: rectangle and circle fills, a
//! two-stop diagonal gradient, and export as an uncompressed 24-bit BMP
//! wrapped in a base64 data URI.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A fixed-size RGBA raster target.
///
/// Pixels start fully transparent; the compositor's first step always
/// fills the whole canvas with an opaque gradient.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at (x, y). Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
            a: self.pixels[i + 3],
        }
    }

    /// Source-over blend of `color` onto (x, y). Out-of-bounds is a no-op.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let sa = u32::from(color.a);
        let da = u32::from(self.pixels[i + 3]);
        let inv = 255 - sa;

        let mix = |src: u8, dst: u8| -> u8 {
            ((u32::from(src) * sa + u32::from(dst) * inv + 127) / 255) as u8
        };
        self.pixels[i] = mix(color.r, self.pixels[i]);
        self.pixels[i + 1] = mix(color.g, self.pixels[i + 1]);
        self.pixels[i + 2] = mix(color.b, self.pixels[i + 2]);
        self.pixels[i + 3] = (sa + da * inv / 255).min(255) as u8;
    }

    /// Fill the whole canvas with a two-stop diagonal linear gradient
    /// from the top-left (`from`) to the bottom-right (`to`).
    pub fn fill_linear_gradient(&mut self, from: Rgba, to: Rgba) {
        let span = (self.width + self.height).saturating_sub(2).max(1) as f64;
        for y in 0..self.height {
            for x in 0..self.width {
                let t = f64::from(x + y) / span;
                let lerp = |a: u8, b: u8| -> u8 {
                    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
                };
                let i = ((y * self.width + x) * 4) as usize;
                self.pixels[i] = lerp(from.r, to.r);
                self.pixels[i + 1] = lerp(from.g, to.g);
                self.pixels[i + 2] = lerp(from.b, to.b);
                self.pixels[i + 3] = 255;
            }
        }
    }

    /// Blend an axis-aligned rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba) {
        for dy in 0..i64::from(h) {
            for dx in 0..i64::from(w) {
                self.blend(x + dx, y + dy, color);
            }
        }
    }

    /// Blend a filled circle, clipped to the canvas.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba) {
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        let r2 = radius * radius;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Encode as an uncompressed bottom-up 24-bit BMP.
    pub fn to_bmp(&self) -> Vec<u8> {
        const HEADER_LEN: u32 = 14 + 40;
        let row_len = (self.width * 3).div_ceil(4) * 4;
        let image_len = row_len * self.height;
        let file_len = HEADER_LEN + image_len;

        let mut out = Vec::with_capacity(file_len as usize);

        // BITMAPFILEHEADER
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_len.to_le_bytes());
        out.extend_from_slice(&[0, 0, 0, 0]);
        out.extend_from_slice(&HEADER_LEN.to_le_bytes());

        // BITMAPINFOHEADER
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&(self.width as i32).to_le_bytes());
        out.extend_from_slice(&(self.height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&image_len.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        let padding = (row_len - self.width * 3) as usize;
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let p = self.pixel(x, y);
                out.extend_from_slice(&[p.b, p.g, p.r]);
            }
            out.extend(std::iter::repeat(0u8).take(padding));
        }

        out
    }

    /// Encode as a `data:image/bmp;base64,...` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/bmp;base64,{}", BASE64.encode(self.to_bmp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.pixel(0, 0), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut canvas = Canvas::new(10, 10);
        let from = Rgba::opaque(0x66, 0x7e, 0xea);
        let to = Rgba::opaque(0x76, 0x4b, 0xa2);
        canvas.fill_linear_gradient(from, to);

        assert_eq!(canvas.pixel(0, 0), from);
        assert_eq!(canvas.pixel(9, 9), to);
    }

    #[test]
    fn test_opaque_fill_rect_overwrites() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_linear_gradient(Rgba::opaque(0, 0, 0), Rgba::opaque(0, 0, 0));
        canvas.fill_rect(2, 2, 3, 3, Rgba::opaque(255, 255, 255));

        assert_eq!(canvas.pixel(3, 3), Rgba::opaque(255, 255, 255));
        assert_eq!(canvas.pixel(0, 0), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn test_semi_transparent_blend_mixes() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill_linear_gradient(Rgba::opaque(0, 0, 0), Rgba::opaque(0, 0, 0));
        canvas.blend(0, 0, Rgba::new(255, 255, 255, 128));

        let p = canvas.pixel(0, 0);
        assert!(p.r > 100 && p.r < 160);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn test_out_of_bounds_draws_are_ignored() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(-10, -10, 5, 5, Rgba::opaque(1, 2, 3));
        canvas.fill_circle(100.0, 100.0, 5.0, Rgba::opaque(1, 2, 3));
        assert_eq!(canvas.pixel(3, 3), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_bmp_header_shape() {
        let canvas = Canvas::new(5, 3);
        let bmp = canvas.to_bmp();

        assert_eq!(&bmp[0..2], b"BM");
        let file_len = u32::from_le_bytes([bmp[2], bmp[3], bmp[4], bmp[5]]);
        assert_eq!(file_len as usize, bmp.len());
        // 5 px * 3 bytes = 15, padded to 16 per row.
        assert_eq!(bmp.len(), 54 + 16 * 3);
    }

    #[test]
    fn test_data_uri_prefix() {
        let canvas = Canvas::new(2, 2);
        assert!(canvas.to_data_uri().starts_with("data:image/bmp;base64,"));
    }
}

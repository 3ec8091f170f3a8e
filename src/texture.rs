/// Procedural RGBA8 image, uploaded to the GPU by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn from_fn(width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let rgba = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .flat_map(|(x, y)| pixel(x, y))
            .collect();
        Self { width, height, rgba }
    }

    pub fn solid(color: [u8; 4]) -> Self {
        Self::from_fn(1, 1, |_, _| color)
    }

    /// `cells` x `cells` checkerboard
    pub fn checker(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = (size / cells.max(1)).max(1);
        Self::from_fn(size, size, |x, y| if (x / cell + y / cell) % 2 == 0 { a } else { b })
    }

    /// Crate-like tile: a border frame around a filled center
    pub fn framed(size: u32, border: u32, frame: [u8; 4], fill: [u8; 4]) -> Self {
        Self::from_fn(size, size, |x, y| {
            let edge = x < border || y < border || x >= size - border || y >= size - border;
            if edge {
                frame
            } else {
                fill
            }
        })
    }

    /// Horizontal stripes, `period` pixels per color pair
    pub fn stripes(size: u32, period: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let half = (period / 2).max(1);
        Self::from_fn(size, size, |_, y| if (y / half) % 2 == 0 { a } else { b })
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn buffer_matches_dimensions() {
        let texture = TextureData::checker(64, 8, BLACK, WHITE);
        assert_eq!(texture.rgba.len(), 64 * 64 * 4);
        assert_eq!(texture.bytes_per_row(), 256);
    }

    #[test]
    fn checker_alternates_cells() {
        let texture = TextureData::checker(64, 8, BLACK, WHITE);
        assert_eq!(texture.pixel(0, 0), BLACK);
        assert_eq!(texture.pixel(8, 0), WHITE);
        assert_eq!(texture.pixel(8, 8), BLACK);
        assert_eq!(texture.pixel(63, 0), WHITE);
    }

    #[test]
    fn framed_has_border() {
        let texture = TextureData::framed(32, 3, BLACK, WHITE);
        assert_eq!(texture.pixel(0, 16), BLACK);
        assert_eq!(texture.pixel(31, 16), BLACK);
        assert_eq!(texture.pixel(16, 16), WHITE);
    }

    #[test]
    fn stripes_are_horizontal() {
        let texture = TextureData::stripes(16, 8, BLACK, WHITE);
        assert_eq!(texture.pixel(0, 0), texture.pixel(15, 0));
        assert_eq!(texture.pixel(0, 0), BLACK);
        assert_eq!(texture.pixel(0, 4), WHITE);
    }

    #[test]
    fn solid_is_single_pixel() {
        let texture = TextureData::solid(WHITE);
        assert_eq!((texture.width, texture.height), (1, 1));
        assert_eq!(texture.rgba, WHITE.to_vec());
    }
}

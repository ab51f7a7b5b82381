/// Rectangular grid of matched characters, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn new(width: u32, height: u32, cells: Vec<char>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> char {
        assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.chunks(width).map(|row| row.iter().collect::<String>())
    }
}

use swatch::{Rect, Rgb};

pub const DEFAULT_FG: Rgb = Rgb::new(220, 220, 220);
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            bold: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// A grid of cells. Writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Paint the background of every cell in `rect`, keeping its text.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)` on top of the existing background.
    /// Returns the column after the last character.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bold: bool) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if let Some(cell) = self.get_mut(col, y) {
                cell.char = ch;
                cell.fg = fg;
                cell.bold = bold;
            }
            col = col.saturating_add(1);
        }
        col
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips() {
        let mut buf = Buffer::new(4, 1);
        let end = buf.put_str(2, 0, "abc", DEFAULT_FG, true);
        assert_eq!(end, 5);
        assert_eq!(buf.get(2, 0).map(|c| c.char), Some('a'));
        assert_eq!(buf.get(3, 0).map(|c| c.char), Some('b'));
        assert!(buf.get(3, 0).is_some_and(|c| c.bold));
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn test_fill_keeps_text() {
        let mut buf = Buffer::new(3, 3);
        buf.set(1, 1, Cell::new('x'));
        let red = Rgb::new(255, 0, 0);
        buf.fill(Rect::new(0, 0, 2, 2), red);

        assert_eq!(buf.get(1, 1), Some(&Cell::new('x').with_bg(red)));
        assert_eq!(buf.get(2, 2), Some(&Cell::default()));
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let a = Buffer::new(3, 2);
        let mut b = Buffer::new(3, 2);
        b.set(2, 1, Cell::new('z'));

        let changed: Vec<_> = b.diff(&a).map(|(x, y, c)| (x, y, c.char)).collect();
        assert_eq!(changed, vec![(2, 1, 'z')]);
    }
}

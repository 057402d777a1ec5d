//! Display surface holding the squares painted by the UI

use crate::types::Square;
use eframe::egui;
use std::sync::{Arc, Mutex};

/// Root container the squares are appended to. Clones share the same squares.
#[derive(Clone)]
pub struct Surface {
    squares: Arc<Mutex<Vec<Square>>>,
    ctx: egui::Context,
}

impl Surface {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            squares: Arc::new(Mutex::new(Vec::new())),
            ctx,
        }
    }

    pub fn append(&self, square: Square) -> SquareHandle {
        let index = {
            let mut squares = self.squares.lock().unwrap();
            squares.push(square);
            squares.len() - 1
        };
        self.ctx.request_repaint();
        SquareHandle {
            surface: self.clone(),
            index,
        }
    }

    /// Copy of every square, in insertion order
    pub fn snapshot(&self) -> Vec<Square> {
        self.squares.lock().unwrap().clone()
    }

    pub fn request_repaint(&self) {
        self.ctx.request_repaint();
    }

    pub fn len(&self) -> usize {
        self.squares.lock().unwrap().len()
    }
}

/// Handle to one square on a surface
#[derive(Clone)]
pub struct SquareHandle {
    surface: Surface,
    index: usize,
}

impl SquareHandle {
    /// Mutate the square and schedule a repaint
    pub fn update(&self, f: impl FnOnce(&mut Square)) {
        {
            let mut squares = self.surface.squares.lock().unwrap();
            f(&mut squares[self.index]);
        }
        self.surface.ctx.request_repaint();
    }

    pub fn get(&self) -> Square {
        self.surface.squares.lock().unwrap()[self.index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SquareColor;

    #[test]
    fn append_returns_handle_to_new_square() {
        let surface = Surface::new(egui::Context::default());
        let handle = surface.append(Square::new(42.0));

        assert_eq!(surface.len(), 1);
        assert_eq!(handle.get().size, 42.0);
    }

    #[test]
    fn updates_through_handle_are_visible_on_surface() {
        let surface = Surface::new(egui::Context::default());
        let handle = surface.append(Square::new(10.0));
        handle.clone().update(|s| s.color = SquareColor::Blue);

        assert_eq!(surface.snapshot()[0].color, SquareColor::Blue);
    }
}

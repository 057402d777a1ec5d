//! Square factory, movement and coloring

use crate::surface::{Surface, SquareHandle};
use crate::types::{Square, SquareColor, Transition};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Create a square of `size` px at the surface origin, filled black.
pub fn create_square(surface: &Surface, size: f32) -> SquareHandle {
    debug!(size, "Creating square");
    surface.append(Square::new(size))
}

/// Move the square to `distance` px with a linear transition.
///
/// Resolves once `duration` has elapsed on a timer. The painted transition is
/// not observed, so the future may complete slightly before or after the last
/// frame of the animation.
pub async fn start_movement(square: &SquareHandle, distance: f32, duration: Duration) {
    square.update(|s| {
        s.transition = Some(Transition {
            duration,
            from_left: s.left,
            started: Instant::now(),
        });
        s.left = distance;
    });
    debug!(distance, duration_ms = duration.as_millis() as u64, "Movement started");

    tokio::time::sleep(duration).await;
}

/// Set the fill from a request result.
pub fn change_color(square: &SquareHandle, result: &str) {
    let color = SquareColor::from_result(result);
    debug!(result, %color, "Changing square color");
    square.update(|s| s.color = color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_DISTANCE, DEFAULT_DURATION, DEFAULT_SQUARE_SIZE};
    use eframe::egui;

    fn surface() -> Surface {
        Surface::new(egui::Context::default())
    }

    #[test]
    fn create_square_appends_one_black_square() {
        let surface = surface();
        let square = create_square(&surface, DEFAULT_SQUARE_SIZE);

        assert_eq!(surface.len(), 1);
        let s = square.get();
        assert_eq!((s.top, s.left, s.size), (0.0, 0.0, 100.0));
        assert_eq!(s.color, SquareColor::Black);
    }

    #[tokio::test(start_paused = true)]
    async fn movement_resolves_after_duration() {
        let square = create_square(&surface(), DEFAULT_SQUARE_SIZE);
        let start = Instant::now();

        start_movement(&square, DEFAULT_DISTANCE, DEFAULT_DURATION).await;

        assert!(start.elapsed() >= DEFAULT_DURATION);
        let s = square.get();
        assert_eq!(s.left, 100.0);
        let t = s.transition.expect("transition set");
        assert_eq!(t.duration, DEFAULT_DURATION);
        assert_eq!(t.from_left, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn movement_sets_target_before_waiting() {
        let square = create_square(&surface(), DEFAULT_SQUARE_SIZE);
        let moving = square.clone();
        let task = tokio::spawn(async move {
            start_movement(&moving, 250.0, Duration::from_millis(300)).await;
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        let s = square.get();
        assert_eq!(s.left, 250.0);
        assert!(s.is_animating(Instant::now()));
        assert!(!task.is_finished());

        task.await.unwrap();
        assert!(!square.get().is_animating(Instant::now()));
    }

    #[test]
    fn change_color_follows_result() {
        let square = create_square(&surface(), 10.0);

        change_color(&square, "1");
        assert_eq!(square.get().color, SquareColor::Green);
        change_color(&square, "0");
        assert_eq!(square.get().color, SquareColor::Blue);
        change_color(&square, "error");
        assert_eq!(square.get().color, SquareColor::Red);
        change_color(&square, "garbage");
        assert_eq!(square.get().color, SquareColor::Red);
    }
}

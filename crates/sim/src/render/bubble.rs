//! Bubble gauge scene.

use crate::analysis::LevelGauge;
use crate::render::{Anchor, Primitive, Rgba, Scene, TextStyle};

/// Disk radius as a fraction of the scene size.
const RADIUS_FRACTION: f64 = 0.35;

/// Draw `gauge` as a disk filled from the bottom in proportion to its level.
///
/// The disk is the background colour brightened, the fill uses `fill` and is
/// clipped to the disk.
pub fn bubble_scene(gauge: &LevelGauge, size: u32, background: Rgba, fill: Rgba) -> Scene {
    let mut scene = Scene::new(size, size, background);
    let side = size as f64;
    let (cx, cy) = (side / 2.0, side / 2.0);
    let r = side * RADIUS_FRACTION;

    scene.push(Primitive::FillEllipse {
        cx,
        cy,
        rx: r,
        ry: r,
        color: background.brighter().with_alpha(200),
    });

    let fill_height = 2.0 * r * gauge.fill_height();
    if fill_height > 0.0 {
        scene.push(Primitive::PushClipEllipse {
            cx,
            cy,
            rx: r,
            ry: r,
        });
        scene.push(Primitive::FillRect {
            x: cx - r,
            y: cy + r - fill_height,
            width: 2.0 * r,
            height: fill_height,
            color: fill,
        });
        scene.push(Primitive::PopClip);
    }

    scene.text(
        cx,
        (cy - r) / 2.0 + 6.0,
        gauge.title(),
        Anchor::Middle,
        TextStyle::TITLE,
    );
    scene.text(
        cx,
        cy + r + (side - cy - r) / 2.0 + 6.0,
        format!("{:.3}", gauge.level()),
        Anchor::Middle,
        TextStyle::TITLE,
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_rect(scene: &Scene) -> Option<(f64, f64)> {
        scene.primitives.iter().find_map(|p| match p {
            Primitive::FillRect { y, height, .. } => Some((*y, *height)),
            _ => None,
        })
    }

    #[test]
    fn test_half_level_fills_half_height() {
        let mut gauge = LevelGauge::default();
        gauge.set_level(0.5);
        let scene = bubble_scene(&gauge, 200, Rgba::rgb(238, 238, 238), Rgba::CYAN);

        let (y, height) = fill_rect(&scene).unwrap();
        assert!((height - 70.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
        assert!(scene.texts().contains(&"0.500"));
        assert!(scene.texts().contains(&"Allele Frequency"));
    }

    #[test]
    fn test_fill_is_clipped_to_disk() {
        let mut gauge = LevelGauge::default();
        gauge.set_level(0.25);
        let scene = bubble_scene(&gauge, 200, Rgba::WHITE, Rgba::CYAN);

        let kinds: Vec<&str> = scene
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::FillEllipse { .. } => "disk",
                Primitive::PushClipEllipse { .. } => "clip",
                Primitive::FillRect { .. } => "fill",
                Primitive::PopClip => "pop",
                _ => "other",
            })
            .collect();
        assert_eq!(&kinds[..4], &["disk", "clip", "fill", "pop"]);
    }

    #[test]
    fn test_empty_gauge_has_no_fill() {
        let gauge = LevelGauge::default();
        let scene = bubble_scene(&gauge, 200, Rgba::WHITE, Rgba::CYAN);

        assert!(fill_rect(&scene).is_none());
        assert!(scene.texts().contains(&"0.000"));
    }

    #[test]
    fn test_disk_colour_is_brightened_background() {
        let gauge = LevelGauge::default();
        let background = Rgba::rgb(100, 100, 100);
        let scene = bubble_scene(&gauge, 200, background, Rgba::CYAN);

        match &scene.primitives[0] {
            Primitive::FillEllipse { color, .. } => {
                assert_eq!(*color, background.brighter().with_alpha(200));
            }
            other => panic!("unexpected first primitive {other:?}"),
        }
    }
}

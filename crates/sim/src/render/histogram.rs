//! Horizontal-bar histogram scenes.

use crate::analysis::FrequencyHistogram;
use crate::render::{Anchor, PlotArea, Primitive, Rgba, Scene, TextStyle};

pub const BAR_COLOR: Rgba = Rgba::BLUE;

/// Draw `hist` with one horizontal bar per bucket.
///
/// Bucket 0 is the bottom bar. Bars share 90% of the plot height; the
/// remaining 10% is split evenly between the gaps. Bar length is the bucket
/// count over the display scale. The count axis has one tick per bucket.
pub fn histogram_scene(
    hist: &FrequencyHistogram,
    title: &str,
    width: u32,
    height: u32,
    background: Rgba,
) -> Scene {
    let area = PlotArea::with_margins(width, height);
    let mut scene = Scene::new(width, height, background);

    let bars = hist.bucket_count();
    let bar_height = area.height * 0.9 / bars as f64;
    let spacing = area.height * 0.1 / (bars + 1) as f64;

    for i in 0..bars {
        let top = area.bottom() - (spacing + bar_height) * (i + 1) as f64;
        let length = hist.display_fraction(i).min(1.0) * area.width;
        let middle = top + bar_height / 2.0 + 4.0;

        scene.push(Primitive::FillRect {
            x: area.left,
            y: top,
            width: length,
            height: bar_height,
            color: BAR_COLOR,
        });
        scene.text(
            area.left - 6.0,
            middle,
            hist.bucket_label(i),
            Anchor::End,
            TextStyle::LABEL,
        );
        if let Some(percent) = hist.percentage(i) {
            scene.text(
                area.left + length + 6.0,
                middle,
                format!("({percent:.1}%)"),
                Anchor::Start,
                TextStyle::LABEL,
            );
        }
    }

    let black = Rgba::BLACK;
    scene.line(area.left, area.top, area.left, area.bottom(), black);
    scene.line(area.left, area.bottom(), area.right(), area.bottom(), black);

    let scale = hist.display_scale();
    let ticks = bars as u64;
    for i in 0..=ticks {
        let x = area.left + area.width * i as f64 / ticks as f64;
        scene.line(x, area.bottom() - 3.0, x, area.bottom() + 3.0, black);
        scene.text(
            x,
            area.bottom() + 15.0,
            format!("{}", scale * i / ticks),
            Anchor::Middle,
            TextStyle::LABEL,
        );
    }

    scene.text(
        area.left + area.width / 2.0,
        area.top / 2.0 + 5.0,
        title,
        Anchor::Middle,
        TextStyle::TITLE,
    );
    scene.text(
        area.left + area.width / 2.0,
        area.bottom() + 32.0,
        format!("Runs: {}", hist.sample_count()),
        Anchor::Middle,
        TextStyle::LABEL,
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(scene: &Scene) -> Vec<(f64, f64)> {
        scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::FillRect { y, width, .. } => Some((*y, *width)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_bar_per_bucket() {
        let hist = FrequencyHistogram::allele_frequency();
        let scene = histogram_scene(&hist, "Final Frequency", 600, 300, Rgba::WHITE);

        let bars = bars(&scene);
        assert_eq!(bars.len(), 7);
        assert!(bars.iter().all(|&(_, width)| width == 0.0));
        // Bucket 0 sits at the bottom
        assert!(bars.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn test_empty_histogram_has_no_percentages() {
        let hist = FrequencyHistogram::heterozygosity();
        let scene = histogram_scene(&hist, "Heterozygosity", 600, 300, Rgba::WHITE);

        assert!(!scene.texts().iter().any(|t| t.ends_with("%)")));
        assert!(scene.texts().contains(&"0.0-0.1"));
    }

    #[test]
    fn test_bar_length_and_labels() {
        let mut hist = FrequencyHistogram::allele_frequency();
        for _ in 0..50 {
            hist.add_data(1.0);
        }
        let scene = histogram_scene(&hist, "Final Frequency", 600, 300, Rgba::WHITE);
        let area = PlotArea::with_margins(600, 300);

        let bars = bars(&scene);
        assert!((bars[6].1 - area.width * 0.5).abs() < 1e-9);
        let texts = scene.texts();
        assert!(texts.contains(&"(100.0%)"));
        assert!(texts.contains(&"(0.0%)"));
        assert!(texts.contains(&"100"));
        assert!(texts.contains(&"Runs: 50"));
    }

    #[test]
    fn test_count_ticks_follow_bucket_count() {
        let hist = FrequencyHistogram::allele_frequency();
        let scene = histogram_scene(&hist, "Final Frequency", 600, 300, Rgba::WHITE);
        let texts = scene.texts();

        // One tick per bucket: 100 * i / 7
        for label in ["0", "14", "28", "42", "57", "71", "85", "100"] {
            assert!(texts.contains(&label), "missing tick {label}");
        }
        assert!(!texts.contains(&"50"));
    }

    #[test]
    fn test_bottom_bar_touches_axis_gap() {
        let hist = FrequencyHistogram::heterozygosity();
        let scene = histogram_scene(&hist, "Heterozygosity", 600, 300, Rgba::WHITE);
        let area = PlotArea::with_margins(600, 300);

        let bar_height = area.height * 0.9 / 6.0;
        let spacing = area.height * 0.1 / 7.0;
        let first = bars(&scene)[0].0;
        assert!((first - (area.bottom() - spacing - bar_height)).abs() < 1e-9);
    }
}

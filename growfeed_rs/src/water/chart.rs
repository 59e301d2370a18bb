//! Geometry for the historical line chart (inline SVG).

use crate::water::history::HistoricalSeries;
use crate::water::metrics::Metric;

/// Drawing area in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 400.0,
            padding: 40.0,
        }
    }
}

impl ChartFrame {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.plot_width() / 2.0;
        }
        self.padding + self.plot_width() * index as f64 / (count - 1) as f64
    }

    pub fn y_at(&self, value: f64, y_max: f64) -> f64 {
        let ratio = if y_max > 0.0 { value / y_max } else { 0.0 };
        self.padding + self.plot_height() * (1.0 - ratio)
    }
}

/// Upper bound of the y axis: largest charted value rounded up to a
/// multiple of 5. The axis always starts at zero.
pub fn y_max(series: &HistoricalSeries) -> f64 {
    let max = series
        .iter()
        .flat_map(|p| Metric::ALL.map(|m| p.value(m)))
        .fold(0.0_f64, f64::max);
    ((max / 5.0).ceil() * 5.0).max(5.0)
}

/// `points` attribute for one metric's polyline.
pub fn polyline(series: &HistoricalSeries, metric: Metric, frame: &ChartFrame) -> String {
    let top = y_max(series);
    let count = series.len();
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{:.1},{:.1}",
                frame.x_at(i, count),
                frame.y_at(p.value(metric), top)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal grid lines: `(y coordinate, axis value)` from zero to the top.
pub fn grid_lines(series: &HistoricalSeries, frame: &ChartFrame, steps: usize) -> Vec<(f64, f64)> {
    let top = y_max(series);
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let value = top * i as f64 / steps as f64;
            (frame.y_at(value, top), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::history::HistoryPoint;
    use crate::water::metrics::Snapshot;
    use crate::water::random::ScriptedSource;

    fn flat_series(len: usize) -> HistoricalSeries {
        let mut series = HistoricalSeries::seeded(len, &mut ScriptedSource::new([0.0]));
        for i in 0..len {
            let point = HistoryPoint::from_snapshot(i.to_string(), &Snapshot::default());
            series.push(point);
        }
        series
    }

    #[test]
    fn y_axis_rounds_up_to_five() {
        // baseline temperature 25.0 is the largest value
        assert_eq!(y_max(&flat_series(4)), 25.0);

        let mut series = flat_series(4);
        let mut hot = Snapshot::default();
        hot.temperature.value = 26.3;
        series.push(HistoryPoint::from_snapshot("hot", &hot));
        assert_eq!(y_max(&series), 30.0);
    }

    #[test]
    fn polyline_spans_the_plot_area() {
        let frame = ChartFrame {
            width: 200.0,
            height: 100.0,
            padding: 10.0,
        };
        let series = flat_series(3);
        let points = polyline(&series, Metric::Temperature, &frame);
        // temperature sits exactly on the top of a 0..25 axis
        assert_eq!(points, "10.0,10.0 100.0,10.0 190.0,10.0");

        let ph = polyline(&series, Metric::Ph, &frame);
        // 7.0 / 25.0 of 80 units above the bottom edge (90.0)
        assert_eq!(ph, "10.0,67.6 100.0,67.6 190.0,67.6");
    }

    #[test]
    fn single_point_is_centered() {
        let frame = ChartFrame::default();
        assert_eq!(frame.x_at(0, 1), 480.0);
    }

    #[test]
    fn grid_runs_bottom_to_top() {
        let frame = ChartFrame {
            width: 100.0,
            height: 100.0,
            padding: 0.0,
        };
        let lines = grid_lines(&flat_series(2), &frame, 5);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], (100.0, 0.0));
        assert_eq!(lines[5], (0.0, 25.0));
    }
}

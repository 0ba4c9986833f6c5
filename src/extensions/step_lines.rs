//! Step-line connectors between adjacent stacks of a waterfall chart.
//!
//! Every draw pass recomputes everything from the live datasets and bar
//! models: datasets are grouped by stack id, each visible group is reduced to
//! its topmost rendered bar, and adjacent representatives whose edges line up
//! get a gradient-filled quadrilateral between them.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::api::{BarDataset, StepLineOptions, StepLineStyle};
use crate::core::{BarModel, PixelPoint};
use crate::render::{
    Color, Fill, LinearGradient, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartHost;

const DEBUG_LABEL_FONT_SIZE_PX: f64 = 9.0;

/// Geometry of one bar as seen by the connector builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSnapshot {
    pub dataset_index: usize,
    pub right_x: f64,
    pub left_x: f64,
    pub top_y: f64,
    /// Lowest (numerically largest) base among the non-dummy members.
    pub base_y: f64,
    /// Lowest base among all members, dummies included.
    pub dummy_base_y: f64,
    pub is_positive: bool,
    pub style: StepLineStyle,
}

/// Visible members of one stack, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackGroup {
    pub stack: Option<String>,
    pub members: Vec<StackSnapshot>,
}

impl StackGroup {
    /// The last member, i.e. the bar rendered on top of the stack.
    #[must_use]
    pub fn representative(&self) -> Option<&StackSnapshot> {
        self.members.last()
    }
}

/// Quadrilateral joining two adjacent stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConnector {
    pub top_right: PixelPoint,
    pub top_left: PixelPoint,
    pub bottom_left: PixelPoint,
    pub bottom_right: PixelPoint,
    pub gradient: LinearGradient,
}

impl StepConnector {
    /// Corners in fill order: current top-right, next top-left, next
    /// bottom-left, current bottom-right.
    #[must_use]
    pub fn corners(&self) -> [PixelPoint; 4] {
        [
            self.top_right,
            self.top_left,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    #[must_use]
    pub fn to_polygon(&self) -> PolygonPrimitive {
        PolygonPrimitive::new(
            self.corners(),
            Fill::LinearGradient(self.gradient.clone()),
        )
    }

    /// Raw corner coordinates drawn next to each corner.
    #[must_use]
    pub fn debug_labels(&self) -> [TextPrimitive; 4] {
        let label = |text: String, at: PixelPoint| {
            TextPrimitive::new(
                text,
                at.x,
                at.y,
                DEBUG_LABEL_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Left,
            )
        };
        [
            label(format!("TR: {:.0}", self.top_right.x), self.top_right),
            label(format!("TL: {:.0}", self.top_left.x), self.top_left),
            label(format!("BL: {:.0}", self.bottom_left.y), self.bottom_left),
            label(format!("BR: {:.0}", self.bottom_right.y), self.bottom_right),
        ]
    }
}

/// Groups dataset indices by stack id; groups keep first-appearance order and
/// members keep dataset order.
///
/// Numeric stack ids are not sorted: `["2", "1"]` stays in that order, unlike
/// a JS object keyed by stack id where integer-like keys come first in
/// ascending order.
#[must_use]
pub fn group_by_stack(datasets: &[BarDataset]) -> IndexMap<Option<&str>, Vec<usize>> {
    let mut groups: IndexMap<Option<&str>, Vec<usize>> = IndexMap::new();
    for (index, dataset) in datasets.iter().enumerate() {
        groups
            .entry(dataset.stack.as_deref())
            .or_default()
            .push(index);
    }
    groups
}

/// Builds the visible stack groups for one frame.
///
/// Datasets whose first value is zero (or missing, or without a computed bar
/// model) are dropped; groups left with only dummy stacks are skipped.
pub fn collect_stack_groups<F>(
    datasets: &[BarDataset],
    bar_model: F,
    options: &StepLineOptions,
) -> Vec<StackGroup>
where
    F: Fn(usize) -> Option<BarModel>,
{
    let mut groups = Vec::new();

    for (stack, indices) in group_by_stack(datasets) {
        let members: Vec<(usize, &BarDataset, BarModel)> = indices
            .into_iter()
            .filter_map(|index| {
                let dataset = &datasets[index];
                let first = dataset.first_value()?;
                if first == 0.0 {
                    return None;
                }
                bar_model(index).map(|model| (index, dataset, model))
            })
            .collect();

        if members.iter().all(|(_, dataset, _)| dataset.is_dummy_stack()) {
            trace!(stack = ?stack, "skipping stack without visible bars");
            continue;
        }

        let lowest_base = members
            .iter()
            .filter(|(_, dataset, _)| !dataset.is_dummy_stack())
            .map(|(_, _, model)| model.base)
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest_dummy_base = members
            .iter()
            .map(|(_, _, model)| model.base)
            .fold(f64::NEG_INFINITY, f64::max);

        let snapshots = members
            .iter()
            .map(|(index, dataset, model)| StackSnapshot {
                dataset_index: *index,
                right_x: model.right_x(),
                left_x: model.left_x(),
                top_y: model.y,
                base_y: lowest_base,
                dummy_base_y: lowest_dummy_base,
                is_positive: dataset.first_value().is_some_and(|value| value > 0.0),
                style: options.style_for(&dataset.step_line_overrides()),
            })
            .collect();

        groups.push(StackGroup {
            stack: stack.map(str::to_owned),
            members: snapshots,
        });
    }

    groups
}

/// Whether two neighbouring stack tops should be joined: flat step between
/// tops, or one stack starting where the other ends.
#[must_use]
pub fn is_adjacent(current: &StackSnapshot, next: &StackSnapshot) -> bool {
    current.top_y == next.top_y || current.base_y == next.top_y || current.top_y == next.base_y
}

/// Computes the connector between `current` and the stack to its right.
#[must_use]
pub fn build_connector(current: &StackSnapshot, next: &StackSnapshot) -> StepConnector {
    let mut current_top = current.top_y;
    let mut current_base = current.base_y;
    let mut next_top = next.top_y;
    let mut next_base = next.base_y;

    // Top-to-bottom junctions collapse onto the base so the step is horizontal.
    if current_top == next_base {
        next_top = next_base;
        next_base = next.dummy_base_y;
    } else if current_base == next_top {
        current_top = current_base;
        current_base = current.dummy_base_y;
    }

    // Sign change: the bar on the other side of the zero line is flipped.
    if !current.is_positive && next.is_positive {
        next_top = next_base;
        next_base = next.top_y;
    }
    if current.is_positive && !next.is_positive {
        current_top = current_base;
        current_base = current.top_y;
    }

    let y_start = current_top.max(next_top);
    let y_end = current_base.max(next_base);
    let style = current.style;
    let gradient = LinearGradient::vertical(y_start, y_end)
        .with_stop(style.start_color_stop, style.start_color)
        .with_stop(style.end_color_stop, style.end_color);

    StepConnector {
        top_right: PixelPoint::new(current.right_x, current_top),
        top_left: PixelPoint::new(next.left_x, next_top),
        bottom_left: PixelPoint::new(next.left_x, next_base),
        bottom_right: PixelPoint::new(current.right_x, current_base),
        gradient,
    }
}

/// All connectors for the current frame, left to right.
pub fn compute_step_lines<F>(
    datasets: &[BarDataset],
    bar_model: F,
    options: &StepLineOptions,
) -> Vec<StepConnector>
where
    F: Fn(usize) -> Option<BarModel>,
{
    let groups = collect_stack_groups(datasets, bar_model, options);
    let representatives: Vec<&StackSnapshot> = groups
        .iter()
        .filter_map(StackGroup::representative)
        .collect();

    representatives
        .windows(2)
        .filter(|pair| is_adjacent(pair[0], pair[1]))
        .map(|pair| {
            let connector = build_connector(pair[0], pair[1]);
            trace!(
                from = pair[0].dataset_index,
                to = pair[1].dataset_index,
                corners = ?connector.corners(),
                "step-line connector"
            );
            connector
        })
        .collect()
}

/// Draws the step lines of `chart` into `frame`; returns the connector count.
pub fn draw_step_lines(
    chart: &dyn ChartHost,
    options: &StepLineOptions,
    frame: &mut RenderFrame,
    debug_annotations: bool,
) -> usize {
    let connectors = compute_step_lines(chart.datasets(), |index| chart.bar_model(index), options);
    for connector in &connectors {
        if debug_annotations {
            for label in connector.debug_labels() {
                frame.push_text(label);
            }
        }
        frame.push_polygon(connector.to_polygon());
    }
    debug!(
        chart_id = %chart.chart_id(),
        connectors = connectors.len(),
        "step lines drawn"
    );
    connectors.len()
}

#[cfg(test)]
mod tests {
    use super::{StackSnapshot, build_connector, is_adjacent};
    use crate::api::StepLineStyle;

    fn snapshot(top_y: f64, base_y: f64, is_positive: bool) -> StackSnapshot {
        StackSnapshot {
            dataset_index: 0,
            right_x: 60.0,
            left_x: 20.0,
            top_y,
            base_y,
            dummy_base_y: base_y,
            is_positive,
            style: StepLineStyle::default(),
        }
    }

    #[test]
    fn adjacency_accepts_three_patterns_only() {
        assert!(is_adjacent(&snapshot(10.0, 100.0, true), &snapshot(10.0, 100.0, true)));
        assert!(is_adjacent(&snapshot(10.0, 100.0, true), &snapshot(100.0, 140.0, true)));
        assert!(is_adjacent(&snapshot(50.0, 100.0, true), &snapshot(20.0, 50.0, true)));
        assert!(!is_adjacent(&snapshot(10.0, 100.0, true), &snapshot(30.0, 100.0, true)));
    }

    #[test]
    fn top_to_base_junction_uses_dummy_base() {
        let current = snapshot(50.0, 100.0, true);
        let mut next = snapshot(20.0, 50.0, true);
        next.dummy_base_y = 100.0;

        let connector = build_connector(&current, &next);
        assert_eq!(connector.top_left.y, 50.0);
        assert_eq!(connector.bottom_left.y, 100.0);
        assert_eq!(connector.top_right.y, 50.0);
    }

    #[test]
    fn base_to_top_junction_uses_current_dummy_base() {
        let mut current = snapshot(30.0, 60.0, true);
        current.dummy_base_y = 100.0;
        let next = snapshot(60.0, 100.0, true);

        let connector = build_connector(&current, &next);
        assert_eq!(connector.top_right.y, 60.0);
        assert_eq!(connector.bottom_right.y, 100.0);
        assert_eq!(connector.top_left.y, 60.0);
        assert_eq!(connector.bottom_left.y, 100.0);
    }

    #[test]
    fn negative_to_positive_flip_without_junction() {
        let current = snapshot(160.0, 100.0, false);
        let next = snapshot(160.0, 200.0, true);

        let connector = build_connector(&current, &next);
        assert_eq!(connector.top_right.y, 160.0);
        assert_eq!(connector.bottom_right.y, 100.0);
        assert_eq!(connector.top_left.y, 200.0);
        assert_eq!(connector.bottom_left.y, 160.0);
        assert_eq!(connector.gradient.y0, 200.0);
        assert_eq!(connector.gradient.y1, 160.0);
    }
}

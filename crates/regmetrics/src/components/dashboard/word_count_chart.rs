use dioxus::prelude::*;
use regmetrics_core::chart::{ChartFrame, ChartLayout};

/// Line chart of word count per agency.
///
/// Drawn once from the full snapshot; typing in the search field never
/// reaches it. Renders an empty surface until the frame arrives.
///
/// Point tooltips are an HTML overlay above the SVG, positioned in
/// percentages of the view box so they follow the chart's scaling.
#[component]
pub fn WordCountChart(frame: ReadSignal<Option<ChartFrame>>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let layout = ChartLayout::default();
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let axis_left = layout.padding;
    let axis_right = layout.width - layout.padding;
    let baseline = layout.baseline();

    let frame = frame.read();
    let Some(frame) = frame.as_ref() else {
        return rsx! {
            section { class: "rm-chart-card",
                svg {
                    id: "historyChart",
                    class: "rm-chart rm-chart--empty",
                    "viewBox": "{view_box}",
                    "preserveAspectRatio": "xMidYMid meet",
                }
            }
        };
    };

    let series = &frame.series;
    let plotted = layout.plot(series);
    let polyline = plotted.polyline();
    let fill = if series.fill { series.color.as_str() } else { "none" };
    let label_x = axis_left - 6.0;
    let label_y = baseline + 14.0;
    let point_labels: Vec<String> = plotted.points.iter().map(|p| p.tooltip()).collect();

    let tooltip = hovered()
        .and_then(|index| plotted.points.get(index))
        .map(|point| {
            let left = point.x / layout.width * 100.0;
            let top = point.y / layout.height * 100.0;
            (
                format!("left: {:.2}%; top: {:.2}%", left, top),
                point.tooltip(),
            )
        });

    rsx! {
        section { class: "rm-chart-card",
            if frame.options.show_legend {
                div { class: "rm-chart-legend",
                    span {
                        class: "rm-chart-legend-swatch",
                        style: "background: {series.color}",
                    }
                    "{series.label}"
                }
            }
            div { class: "rm-chart-surface",
                svg {
                    id: "historyChart",
                    class: "rm-chart",
                    "viewBox": "{view_box}",
                    "preserveAspectRatio": "xMidYMid meet",
                    role: "img",
                    "aria-label": "{series.label}",

                    for tick in plotted.y_ticks.iter() {
                        g { key: "{tick.value}",
                            line {
                                class: "rm-chart-grid",
                                "x1": "{axis_left}",
                                "x2": "{axis_right}",
                                "y1": "{tick.y}",
                                "y2": "{tick.y}",
                            }
                            text {
                                class: "rm-chart-tick",
                                x: "{label_x}",
                                y: "{tick.y}",
                                "text-anchor": "end",
                                "dominant-baseline": "middle",
                                "{tick.label}"
                            }
                        }
                    }

                    if frame.options.show_x_axis {
                        line {
                            class: "rm-chart-axis",
                            "x1": "{axis_left}",
                            "x2": "{axis_right}",
                            "y1": "{baseline}",
                            "y2": "{baseline}",
                        }
                        for point in plotted.points.iter() {
                            text {
                                key: "x-{point.label}",
                                class: "rm-chart-tick",
                                x: "{point.x}",
                                y: "{label_y}",
                                "text-anchor": "middle",
                                "{point.label}"
                            }
                        }
                    }

                    polyline {
                        class: "rm-chart-line",
                        points: "{polyline}",
                        fill: "{fill}",
                        stroke: "{series.color}",
                        "stroke-width": "2",
                    }

                    for (index, (point, label)) in plotted.points.iter().zip(point_labels.iter()).enumerate() {
                        circle {
                            key: "{index}",
                            class: "rm-chart-point",
                            cx: "{point.x}",
                            cy: "{point.y}",
                            r: "3",
                            fill: "{series.color}",
                            "aria-label": "{label}",
                            onmouseenter: move |_| hovered.set(Some(index)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }

                if let Some((position, text)) = tooltip {
                    div { class: "rm-chart-tooltip", role: "tooltip", style: "{position}", "{text}" }
                }
            }
        }
    }
}

//! Simulated live water-quality dashboard.
//!
//! Data lives in a `RwSignal<LiveDashboard>`; the `setInterval` timer that
//! refreshes it is owned by a [`LiveUpdates`] controller kept in a local
//! `StoredValue`. When the component is torn down the controller is paused
//! and then dropped, so no interval outlives the widget.

use growfeed::nav::Section;
use growfeed::water::chart::{self, ChartFrame};
use growfeed::water::{Cadence, LiveDashboard, LiveUpdates, Metric, Reading};
use leptos::prelude::*;

use super::config;
use crate::browser::{self, BrowserScheduler};

#[component]
pub fn WaterStats() -> impl IntoView {
    let settings = config().dashboard;
    let dashboard = RwSignal::new(LiveDashboard::with_entropy(settings.window_len()));
    let (cadence, set_cadence) = signal(settings.initial_cadence);
    let (running, set_running) = signal(false);

    let live = StoredValue::new_local(LiveUpdates::new(
        BrowserScheduler,
        settings.initial_cadence,
        move || {
            dashboard.update(|d| {
                d.tick(browser::local_time());
            });
        },
    ));

    // Mirror controller state into the signals the buttons read
    let sync = move || {
        live.with_value(|l| {
            set_cadence.set(l.cadence());
            set_running.set(l.is_running());
        });
    };

    if settings.start_running {
        live.update_value(|l| {
            if let Err(e) = l.start() {
                tracing::error!(error = %e, "dashboard updates not started");
            }
        });
    }
    sync();

    on_cleanup(move || {
        live.try_update_value(|l| l.pause());
    });

    let choose = move |next: Cadence| {
        live.update_value(|l| {
            if let Err(e) = l.set_cadence(next) {
                tracing::error!(error = %e, cadence = ?next, "cadence change failed");
            }
        });
        sync();
    };

    let toggle = move |_| {
        live.update_value(|l| {
            if let Err(e) = l.toggle() {
                tracing::error!(error = %e, "could not resume updates");
            }
        });
        sync();
    };

    view! {
        <section id={Section::WaterStats.anchor()} class="water-stats">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{Section::WaterStats.label()}</h2>
                    <p class="section-description">"Real-time monitoring of key water parameters"</p>
                </div>

                <div class="stats-controls">
                    <div class="stats-controls-label">
                        <span class="stats-clock">"⏱"</span>
                        "Update Interval:"
                    </div>
                    {Cadence::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || if cadence.get() == option { "chip chip-active" } else { "chip" }
                                    on:click=move |_| choose(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class=move || if running.get() { "chip chip-pause" } else { "chip chip-resume" }
                        on:click=toggle
                    >
                        {move || if running.get() { "Pause Updates" } else { "Resume Updates" }}
                    </button>
                </div>

                <div class="stats-grid">
                    {Metric::ALL
                        .into_iter()
                        .map(|metric| {
                            let reading = Signal::derive(move || dashboard.with(|d| d.reading(metric)));
                            view! { <StatCard metric=metric reading=reading /> }
                        })
                        .collect_view()}
                </div>

                <HistoryChart dashboard=dashboard />

                <p class="stats-status">{move || cadence.get().status_line(running.get())}</p>
            </div>
        </section>
    }
}

fn metric_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::Ph => "💧",
        Metric::Temperature => "🌡",
        Metric::DissolvedOxygen => "〰",
        Metric::Turbidity => "⏚",
    }
}

#[component]
fn StatCard(metric: Metric, reading: Signal<Reading>) -> impl IntoView {
    let accent = format!("border-left-color: {};", metric.color());
    let icon_style = format!("color: {};", metric.color());

    view! {
        <article class="stat-card" style=accent>
            <div class="stat-card-head">
                <div>
                    <p class="stat-card-title">{metric.title()}</p>
                    <h3 class="stat-card-value">
                        {move || reading.get().value.to_string()}
                        <span class="stat-card-unit">{metric.unit()}</span>
                    </h3>
                </div>
                <div class="stat-card-icon" style=icon_style>{metric_icon(metric)}</div>
            </div>
            <div class="stat-card-trend">
                <span class=move || if reading.get().is_rising() { "trend trend-up" } else { "trend trend-down" }>
                    {move || reading.get().trend_label()}
                </span>
                <span class="trend-caption">"vs last update"</span>
            </div>
        </article>
    }
}

#[component]
fn HistoryChart(dashboard: RwSignal<LiveDashboard>) -> impl IntoView {
    let frame = ChartFrame::default();
    let left = frame.padding;
    let right = frame.width - frame.padding;
    let baseline = frame.height - frame.padding / 3.0;

    view! {
        <div class="chart-card">
            <h3 class="chart-title">"Historical Data"</h3>
            <svg
                class="chart"
                viewBox={frame.view_box()}
                preserveAspectRatio="none"
                role="img"
                aria-label="Historical water quality"
            >
                // Grid and y axis
                {move || {
                    dashboard
                        .with(|d| chart::grid_lines(d.history(), &frame, 5))
                        .into_iter()
                        .map(|(y, value)| {
                            view! {
                                <g class="chart-grid">
                                    <line
                                        x1={left.to_string()}
                                        x2={right.to_string()}
                                        y1={y.to_string()}
                                        y2={y.to_string()}
                                        stroke-dasharray="3 3"
                                    />
                                    <text x={(left - 6.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end">
                                        {format!("{value:.0}")}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}

                // One line per metric
                {Metric::ALL
                    .into_iter()
                    .map(|metric| {
                        view! {
                            <polyline
                                fill="none"
                                stroke=metric.color()
                                stroke-width="2"
                                points=move || dashboard.with(|d| chart::polyline(d.history(), metric, &frame))
                            />
                        }
                    })
                    .collect_view()}

                // Oldest and newest time labels
                <text class="chart-axis-label" x={left.to_string()} y={baseline.to_string()} text-anchor="start">
                    {move || dashboard.with(|d| d.history().first().map(|p| p.label.clone()).unwrap_or_default())}
                </text>
                <text class="chart-axis-label" x={right.to_string()} y={baseline.to_string()} text-anchor="end">
                    {move || dashboard.with(|d| d.history().last().map(|p| p.label.clone()).unwrap_or_default())}
                </text>
            </svg>

            <ul class="chart-legend">
                {Metric::ALL
                    .into_iter()
                    .map(|metric| {
                        let swatch = format!("background: {};", metric.color());
                        view! {
                            <li class="chart-legend-item">
                                <span class="chart-legend-swatch" style=swatch></span>
                                {metric.legend()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

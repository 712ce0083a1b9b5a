//! One server in the dashboard list.
//!
//! The row fetches resource usage once on mount and then every
//! [`STATS_POLL_INTERVAL_MS`]. Polling stops while the server is suspended
//! and for good when the row unmounts.

use frostpanel_core::server::{
    BadgeTone, RowDisplay, Server, ServerStats, StatusTone, alarms, bar_width, image_for,
    is_suspended, limit_labels, row_display, status_tone, usage_labels, usage_percentages,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::icons as ic;
use crate::components::router::Link;
use crate::config::STATS_POLL_INTERVAL_MS;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/dashboard/server_row.module.css");

#[component]
pub fn ServerRow(server: Server) -> impl IntoView {
    let href = server.route();
    let image = image_for(&server);
    let alt = format!("{} icon", server.name);
    let name = server.name.clone();
    let description = server.description.clone();
    let allocations = server.default_allocations().join(", ");
    let uuid = server.uuid.clone();
    let server = StoredValue::new(server);

    let stats = RwSignal::new(None::<ServerStats>);
    let image_error = RwSignal::new(false);
    let suspended = Memo::new(move |_| {
        stats.with(|current| server.with_value(|s| is_suspended(s, current.as_ref())))
    });

    // Dropping the interval cancels it. The generation marks which start the
    // pending first fetch belongs to, so a fetch finishing after a restart or
    // teardown never installs a timer.
    let poller = StoredValue::new_local(None::<Interval>);
    let generation = StoredValue::new(0u64);

    let refresh = move |uuid: String| async move {
        match api::get_server_resource_usage(&uuid).await {
            Ok(update) => {
                stats.try_set(Some(update));
            }
            Err(e) => console::warn(&format!("failed to refresh stats of {}: {}", uuid, e)),
        }
    };

    Effect::new(move |_| {
        let suspended = suspended.get();
        let Some(current) = generation.try_update_value(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };
        poller.try_update_value(|p| *p = None);
        if suspended {
            return;
        }

        let uuid = uuid.clone();
        spawn_local(async move {
            refresh(uuid.clone()).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            let interval = Interval::new(STATS_POLL_INTERVAL_MS, move || {
                spawn_local(refresh(uuid.clone()));
            });
            poller.try_update_value(|p| *p = Some(interval));
        });
    });

    on_cleanup(move || {
        generation.try_update_value(|g| *g += 1);
        poller.try_update_value(|p| *p = None);
    });

    let row_class = Signal::derive(move || {
        let tone = stats.with(|s| status_tone(s.as_ref().map(|s| s.status)));
        let tone = match tone {
            StatusTone::Danger => css::danger,
            StatusTone::Ok => css::ok,
            StatusTone::Warning => css::warning,
        };
        format!("{} {}", css::row, tone)
    });

    let usage = move || {
        let suspended = suspended.get();
        stats.with(|current| {
            server.with_value(|s| match (row_display(s, current.as_ref(), suspended), current) {
                (RowDisplay::Badge { tone, label }, _) => view! {
                    <div class=css::badgeWrap>
                        <span class=badge_class(tone)>{label}</span>
                    </div>
                }
                .into_any(),
                (RowDisplay::Stats, Some(current)) => render_stats(s, current),
                (RowDisplay::Stats | RowDisplay::Loading, _) => view! {
                    <div class=css::loading>
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                        <p>"Loading..."</p>
                    </div>
                }
                .into_any(),
            })
        })
    };

    view! {
        <Link href=href class=row_class>
            <div class=css::identity>
                <div class=css::thumb>
                    <Show
                        when=move || !image_error.get()
                        fallback=|| view! { <Icon icon=ic::SERVER /> }
                    >
                        <img
                            src=image.clone()
                            alt=alt.clone()
                            on:error=move |_| image_error.set(true)
                        />
                    </Show>
                </div>
                <div>
                    <p class=css::name>{name}</p>
                    {description.map(|d| view! { <p class=css::description>{d}</p> })}
                </div>
            </div>
            <div class=css::allocation>
                <Icon icon=ic::ALLOCATION />
                <p>{allocations}</p>
            </div>
            <div class=css::usage>{usage}</div>
            <div class=css::statusBar></div>
        </Link>
    }
}

fn badge_class(tone: BadgeTone) -> String {
    let tone = match tone {
        BadgeTone::Suspended => css::badgeSuspended,
        BadgeTone::Transferring => css::badgeTransferring,
        BadgeTone::Installing => css::badgeInstalling,
        BadgeTone::Neutral => css::badgeNeutral,
    };
    format!("{} {}", css::badge, tone)
}

fn render_stats(server: &Server, current: &ServerStats) -> AnyView {
    let alarms = alarms(&server.limits, Some(current));
    let limits = limit_labels(&server.limits);
    let percent = usage_percentages(&server.limits, Some(current));
    let (cpu, memory, disk) = usage_labels(current);

    view! {
        <ResourceColumn icon=ic::CPU value=cpu limit=limits.cpu percent=percent.cpu alarm=alarms.cpu />
        <ResourceColumn
            icon=ic::MEMORY
            value=memory
            limit=limits.memory
            percent=percent.memory
            alarm=alarms.memory
        />
        <ResourceColumn
            icon=ic::STORAGE
            value=disk
            limit=limits.disk
            percent=percent.disk
            alarm=alarms.disk
        />
    }
    .into_any()
}

#[component]
fn ResourceColumn(
    icon: icondata::Icon,
    value: String,
    limit: String,
    percent: f64,
    alarm: bool,
) -> impl IntoView {
    let tone = if alarm { css::alarm } else { css::normal };

    view! {
        <div class=format!("{} {}", css::resource, tone)>
            <div class=css::resourceValue>
                <Icon icon=icon />
                <span>{value}</span>
            </div>
            <p class=css::resourceLimit>"of " {limit}</p>
            <div class=css::bar>
                <div class=css::barFill style=format!("width: {}%", bar_width(percent))></div>
            </div>
        </div>
    }
}

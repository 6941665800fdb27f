use crate::data::STAT_FIGURES;
use crate::dom::VisibilityWatch;
use crate::i18n::t;
use seatline_core::StatCounter;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct TileProps {
    pub label: AttrValue,
    /// Final text, e.g. `50K+`.
    pub figure: AttrValue,
}

#[cfg(target_arch = "wasm32")]
fn count_up_when_visible(
    card: &NodeRef,
    counter: Option<StatCounter>,
    tick: UseStateHandle<Option<u32>>,
) -> Option<VisibilityWatch> {
    let counter = counter?;
    let el = card.cast::<web_sys::Element>()?;
    let delay = i32::try_from(seatline_core::constants::STAT_TICK_MS).unwrap_or(i32::MAX);
    VisibilityWatch::once(&el, move || {
        wasm_bindgen_futures::spawn_local(async move {
            for step in 0..=counter.tick_count() {
                tick.set(Some(step));
                if crate::dom::sleep_ms(delay).await.is_err() {
                    break;
                }
            }
        });
    })
    .map_err(|err| crate::dom::console_error(&crate::dom::js_error_message(&err)))
    .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn count_up_when_visible(
    _: &NodeRef,
    _: Option<StatCounter>,
    _: UseStateHandle<Option<u32>>,
) -> Option<VisibilityWatch> {
    None
}

/// One figure that counts up from zero the first time it scrolls into view.
#[function_component(StatTile)]
pub fn stat_tile(p: &TileProps) -> Html {
    let counter = StatCounter::parse(&p.figure);
    // `None` until the animation starts, so static renders show the final text.
    let tick = use_state(|| None::<u32>);
    let card = use_node_ref();

    {
        let tick = tick.clone();
        let card = card.clone();
        use_effect_with(counter, move |counter| {
            let watch = count_up_when_visible(&card, *counter, tick);
            move || drop(watch)
        });
    }

    let text = match (counter, *tick) {
        (Some(counter), Some(step)) => counter.frame(step),
        _ => p.figure.to_string(),
    };

    html! {
        <div class="stat-card" ref={card}>
            <div class="stat-number"><span>{ text }</span></div>
            <div class="stat-label">{ p.label.clone() }</div>
        </div>
    }
}

#[function_component(StatsStrip)]
pub fn stats_strip() -> Html {
    html! {
        <section class="stats" aria-labelledby="stats-title">
            <h2 id="stats-title">{ t("stats.title") }</h2>
            <div class="stats-grid">
                { for STAT_FIGURES.iter().map(|(key, figure)| html! {
                    <StatTile label={t(key)} figure={*figure} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn static_render_shows_final_figures() {
        let html = block_on(LocalServerRenderer::<StatsStrip>::new().render());
        for figure in ["50K+", "120+", "2.5 Lacks", "35+"] {
            assert!(html.contains(figure), "{figure} missing: {html}");
        }
        assert!(html.contains("Happy Passengers"));
    }
}

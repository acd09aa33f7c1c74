use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::interaction::menu::{MenuEvent, MenuState};
use crate::interaction::scroll::{HeaderScroll, ScrollMetrics};
use crate::interaction::scrollspy::{Scrollspy, SpyBand};
use crate::listeners::{SectionObserver, WindowListener};
use crate::viewport::BrowserViewport;

fn read_scroll() -> Option<ScrollMetrics> {
    BrowserViewport::current().map(|viewport| ScrollMetrics::read(&viewport))
}

/// Reads the scroll geometry on mount and on every scroll, keeping only what
/// `derive` extracts. The component re-renders only when that value changes.
#[hook]
fn use_scroll_metrics<T, F>(derive: F) -> T
where
    T: Copy + Default + PartialEq + 'static,
    F: Fn(ScrollMetrics) -> T + 'static,
{
    let state = use_state_eq(T::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(metrics) = read_scroll() {
                        state.set(derive(metrics));
                    }
                };
                update();
                let listener = WindowListener::passive("scroll", update);
                move || drop(listener)
            },
            (),
        );
    }

    *state
}

/// Progress bar width and the "scrolled" flag for the sticky header.
#[hook]
pub fn use_header_scroll() -> HeaderScroll {
    use_scroll_metrics(HeaderScroll::from)
}

#[hook]
pub fn use_scroll_top_visible() -> bool {
    use_scroll_metrics(|metrics| metrics.shows_scroll_top())
}

/// Id of the section currently inside the scrollspy band, if any.
///
/// One observer per section that exists in the document; ids without a
/// matching element are skipped. All observers disconnect when the effect is
/// torn down.
#[hook]
pub fn use_scrollspy(section_ids: Vec<String>) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |ids: &Vec<String>| {
                let band = SpyBand::default();
                let spy = Rc::new(RefCell::new(Scrollspy::new(ids.iter().cloned(), band.threshold)));
                let document = window().and_then(|w| w.document());
                let root_margin = band.root_margin();
                let thresholds = band.thresholds();

                let observers: Vec<SectionObserver> = ids
                    .iter()
                    .filter_map(|id| {
                        let target = document.as_ref()?.get_element_by_id(id)?;
                        let spy = spy.clone();
                        let active = active.clone();
                        let id = id.clone();
                        SectionObserver::watch(&target, &root_margin, &thresholds, move |ratio| {
                            let mut spy = spy.borrow_mut();
                            spy.record(&id, ratio);
                            active.set(spy.active().map(str::to_owned));
                        })
                    })
                    .collect();

                debug!("Scrollspy watching {} of {} sections", observers.len(), ids.len());
                move || drop(observers)
            },
            section_ids,
        );
    }

    (*active).clone()
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: MenuEvent) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Mobile menu state plus a callback to feed it events. Resize and scroll
/// close the menu, but those listeners only exist while it is open.
#[hook]
pub fn use_menu() -> (MenuState, Callback<MenuEvent>) {
    let menu = use_reducer_eq(MenuState::default);

    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |armed: &bool| {
                let mut listeners = Vec::new();
                if *armed {
                    let on_resize = dispatcher.clone();
                    listeners.push(WindowListener::new("resize", move || {
                        on_resize.dispatch(MenuEvent::Resize)
                    }));
                    listeners.push(WindowListener::passive("scroll", move || {
                        dispatcher.dispatch(MenuEvent::Scroll)
                    }));
                }
                move || drop(listeners)
            },
            menu.wants_dismiss_listeners(),
        );
    }

    let dispatch = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |event: MenuEvent| dispatcher.dispatch(event))
    };

    (*menu, dispatch)
}

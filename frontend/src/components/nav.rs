use yew::prelude::*;

use crate::config::LOGO_PATH;
use crate::scroll::section::{NavEntry, SectionId};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub entries: Vec<NavEntry>,
    pub active: SectionId,
    pub on_select: Callback<SectionId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={LOGO_PATH} alt="PhishMate" />
                </div>
                <ul class="nav-links">
                    { for props.entries.iter().map(|entry| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let id = entry.id.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id.clone());
                            })
                        };
                        let is_active = entry.id == props.active;
                        html! {
                            <li key={entry.id.to_string()}>
                                <button
                                    class={classes!("nav-link", is_active.then_some("active"))}
                                    {onclick}
                                >
                                    {entry.label}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </nav>
    }
}

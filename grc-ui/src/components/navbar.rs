//! Page header bar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    rsx! {
        nav {
            style: "background-color: #1A2CA3; color: white; text-align: center; padding: 16px; margin-bottom: 32px;",
            div {
                style: "font-size: 24px; font-weight: bold;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                div {
                    style: "font-size: 14px; opacity: 0.75;",
                    "{props.subtitle}"
                }
            }
        }
    }
}

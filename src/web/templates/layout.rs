use maud::{html, Markup, DOCTYPE};

use super::{Page, View};
use crate::music::fold_case;

/// Shared page chrome: view links, A-Z filter and the view body
pub(super) fn render(view: View, page: &Page, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Groupie Trackers - " (view.title()) }
                link rel="stylesheet" href="/static/css/style.css";
            }
            body {
                header {
                    h1 { "Groupie Trackers" }
                    nav.views {
                        @for other in View::ALL {
                            a.active[other == view] href=(other.path()) { (other.title()) }
                        }
                    }
                    nav.alphabet {
                        a.selected[page.letter.is_empty()] href=(view.path()) { "All" }
                        @let selected = fold_case(page.letter);
                        @for letter in &page.alphabet {
                            a.selected[fold_case(letter) == selected]
                                href={ (view.path()) "?letter=" (letter) } { (letter) }
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}

/// Rendered when the letter filter leaves nothing
pub(super) fn no_artists(page: &Page) -> Markup {
    html! {
        p.empty { "No artist name starts with \"" (page.letter) "\"." }
    }
}

use maud::{html, Markup};

use super::{layout, Page, View};

pub fn render(page: &Page) -> Markup {
    let body = html! {
        @if page.artists.is_empty() {
            (layout::no_artists(page))
        }
        table.dates {
            thead { tr { th { "Artist" } th { "Concert dates" } } }
            tbody {
                @for artist in &page.artists {
                    tr {
                        td { (artist.name) }
                        td {
                            @if let Some(date) = &artist.dates {
                                ul {
                                    @for day in &date.dates {
                                        li { (day) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    layout::render(View::Dates, page, body)
}

use maud::{html, Markup};

use super::{layout, Page, View};

pub fn render(page: &Page) -> Markup {
    let body = html! {
        @if page.artists.is_empty() {
            (layout::no_artists(page))
        }
        table.locations {
            thead { tr { th { "Artist" } th { "Locations" } } }
            tbody {
                @for artist in &page.artists {
                    tr {
                        td { (artist.name) }
                        td {
                            @if let Some(location) = &artist.locations {
                                ul {
                                    @for place in &location.locations {
                                        li { (place) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    layout::render(View::Locations, page, body)
}

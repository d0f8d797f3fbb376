use maud::{html, Markup};

use super::{layout, Page, View};

pub fn render(page: &Page) -> Markup {
    let body = html! {
        @if page.artists.is_empty() {
            (layout::no_artists(page))
        }
        section.cards {
            @for artist in &page.artists {
                article.card id={ "artist-" (artist.id) } {
                    img src=(artist.image) alt=(artist.name) loading="lazy";
                    h2 { (artist.name) }
                    dl {
                        dt { "Created" }
                        dd { (artist.creation_date) }
                        dt { "First album" }
                        dd { (artist.first_album) }
                        dt { "Members" }
                        dd {
                            ul.members {
                                @for member in &artist.members {
                                    li { (member) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    layout::render(View::Index, page, body)
}

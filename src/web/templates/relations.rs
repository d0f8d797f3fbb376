use maud::{html, Markup};

use super::{layout, Page, View};
use crate::music::Relation;

fn concerts(relation: &Relation) -> Markup {
    html! {
        dl.concerts {
            @for location in relation.dates_locations.keys() {
                dt { (location) }
                dd { (relation.dates_at(location).join(", ")) }
            }
        }
    }
}

/// `index` is the whole relation list, the letter filter does not apply to it
pub fn render(page: &Page, index: &[Relation]) -> Markup {
    let body = html! {
        @if page.artists.is_empty() {
            (layout::no_artists(page))
        }
        section.artists {
            @for artist in &page.artists {
                article id={ "artist-" (artist.id) } {
                    h2 { (artist.name) }
                    @if let Some(relation) = &artist.relations {
                        (concerts(relation))
                    }
                }
            }
        }
        section.index {
            h2 { "All concerts" }
            @for relation in index {
                article id={ "relation-" (relation.id) } {
                    h3 { "#" (relation.id) }
                    (concerts(relation))
                }
            }
        }
    };
    layout::render(View::Relations, page, body)
}

use crate::escape::{html_escape, multiline_html};
use crate::model::Film;

use super::youtube;

/// How a film entry is presented, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmMedia {
    /// Click-to-play player, painted as a thumbnail until activated.
    Embed { id: String },
    /// Thumbnail linking out to YouTube in a new tab.
    External { id: String },
    Poster { src: String },
    None,
}

impl FilmMedia {
    pub fn for_film(film: &Film) -> Self {
        let id = film
            .video_id
            .as_deref()
            .and_then(youtube::video_id)
            .or_else(|| film.url.as_deref().and_then(youtube::video_id));

        match (id, film.poster.as_deref()) {
            (Some(id), _) if !film.no_embed => FilmMedia::Embed { id },
            (Some(id), _) => FilmMedia::External { id },
            (None, Some(poster)) if !poster.is_empty() => FilmMedia::Poster {
                src: poster.to_string(),
            },
            _ => FilmMedia::None,
        }
    }
}

/// Markup for one film, or `None` when it has nothing to show.
pub fn film_card(film: &Film, play_label: &str) -> Option<String> {
    let title = html_escape(&film.title);
    let media = match FilmMedia::for_film(film) {
        FilmMedia::Embed { id } => format!(
            r#"<div class="yt-lite" data-yt="{id}" role="button" tabindex="0" aria-label="{label} : {title}">
      <img class="yt-thumb" src="{max}" data-fallback="{fallback}" alt="" loading="lazy">
      <span class="yt-play" aria-hidden="true"></span>
    </div>"#,
            label = html_escape(play_label),
            max = youtube::thumbnail_max(&id),
            fallback = youtube::thumbnail_fallback(&id),
        ),
        FilmMedia::External { id } => format!(
            r#"<a class="yt-link" href="{href}" target="_blank" rel="noopener noreferrer" aria-label="{label} : {title}">
      <img class="yt-thumb" src="{max}" data-fallback="{fallback}" alt="" loading="lazy">
      <span class="yt-play" aria-hidden="true"></span>
    </a>"#,
            href = youtube::watch_url(&id),
            label = html_escape(play_label),
            max = youtube::thumbnail_max(&id),
            fallback = youtube::thumbnail_fallback(&id),
        ),
        FilmMedia::Poster { src } => format!(
            r#"<img class="film-poster" src="{}" alt="{title}" loading="lazy">"#,
            html_escape(&src),
        ),
        FilmMedia::None => return None,
    };

    Some(format!(
        r#"<article class="film">
  <div class="film-media">
    {media}
  </div>
  <h3 class="film-title">{title}</h3>
  <p class="film-credits">{credits}</p>
</article>
"#,
        credits = multiline_html(&film.credits),
    ))
}

/// Live player that replaces the thumbnail on activation.
pub fn player_iframe(id: &str, title: &str) -> String {
    format!(
        r#"<iframe src="{src}" title="{title}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
        src = youtube::embed_url(id),
        title = html_escape(title),
    )
}

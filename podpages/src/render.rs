//! HTML rendering for the podcast pages
//!
//! Pages are assembled as plain strings, server side. Every dynamic value
//! goes through `quick_xml::escape::escape` before insertion. Each page
//! embeds a hydration island: a JSON `<script>` block carrying the page
//! data, read by the client-side player script to wire up the play buttons.

use crate::home::HomePage;
use chrono::Local;
use podfeed::format::header_date_label;
use podfeed::Episode;
use quick_xml::escape::escape;
use serde::Serialize;

/// Site name, shown in page titles and the header logo alt text
pub const SITE_NAME: &str = "Podarium";

/// Element id of the hydration island
pub const HYDRATION_ELEMENT_ID: &str = "__PODARIUM_DATA__";

const SLOGAN: &str = "O melhor para você ouvir, sempre";

/// Render the home page with its two episode sections
pub fn render_home(home: &HomePage) -> String {
    let mut content = String::from(r#"<div class="homepage">"#);

    content.push_str(r#"<section class="latest-episodes"><h2>Últimos lançamentos</h2><ul>"#);
    for episode in &home.latest_episodes {
        content.push_str(&latest_episode_card(episode));
    }
    content.push_str("</ul></section>");

    content.push_str(r#"<section class="all-episodes"><h2>Todos os episódios</h2>"#);
    content.push_str(r#"<table cellspacing="0"><thead><tr>"#);
    content.push_str("<th></th><th>Podcaster</th><th>Integrantes</th><th>Data</th><th>Duração</th><th></th>");
    content.push_str("</tr></thead><tbody>");
    for episode in &home.all_episodes {
        content.push_str(&episode_table_row(episode));
    }
    content.push_str("</tbody></table></section></div>");

    page("Home", &content, home)
}

/// Render the detail page of a single episode
pub fn render_episode(episode: &Episode) -> String {
    let escaped_title = escape(episode.title.as_str());
    let escaped_thumbnail = escape(episode.thumbnail.as_str());
    let escaped_id = escape(episode.id.as_str());

    let mut content = String::from(r#"<div class="episode">"#);

    content.push_str(r#"<div class="thumbnail-container">"#);
    content.push_str(r#"<a href="/"><button type="button"><img src="/assets/arrow-left.svg" alt="Voltar"/></button></a>"#);
    content.push_str(&format!(
        r#"<img src="{}" alt="{}" width="700" height="160"/>"#,
        escaped_thumbnail, escaped_title
    ));
    content.push_str(&format!(
        r#"<button type="button" class="play-episode" data-episode-id="{}"><img src="/assets/play.svg" alt="Tocar episódio"/></button>"#,
        escaped_id
    ));
    content.push_str("</div>");

    content.push_str("<header>");
    content.push_str(&format!("<h1>{}</h1>", escaped_title));
    content.push_str(&format!("<span>{}</span>", escape(episode.members.as_str())));
    content.push_str(&format!("<span>{}</span>", escape(episode.published_at.as_str())));
    content.push_str(&format!(
        "<span>{}</span>",
        escape(episode.duration_as_string.as_str())
    ));
    content.push_str("</header>");

    // The feed delivers descriptions as HTML fragments, inserted as-is
    content.push_str(&format!(
        r#"<div class="description">{}</div>"#,
        episode.description
    ));
    content.push_str("</div>");

    page(
        &episode.title,
        &content,
        &serde_json::json!({ "episode": episode }),
    )
}

/// Render a user-facing error page
pub fn render_error_page(status: u16, message: &str) -> String {
    let mut content = String::from(r#"<div class="error-page">"#);
    content.push_str(&format!("<h2>Erro {}</h2>", status));
    content.push_str(&format!("<p>{}</p>", escape(message)));
    content.push_str(r#"<a href="/">Voltar para a home</a>"#);
    content.push_str("</div>");

    page(&format!("Erro {}", status), &content, &serde_json::json!(null))
}

fn latest_episode_card(episode: &Episode) -> String {
    let escaped_title = escape(episode.title.as_str());
    let escaped_id = escape(episode.id.as_str());

    let mut html = String::from("<li>");
    html.push_str(&format!(
        r#"<img src="{}" alt="{}" width="192" height="192"/>"#,
        escape(episode.thumbnail.as_str()),
        escaped_title
    ));
    html.push_str(r#"<div class="episode-details">"#);
    html.push_str(&format!(
        r#"<a href="/episodes/{}">{}</a>"#,
        escaped_id, escaped_title
    ));
    html.push_str(&format!("<p>{}</p>", escape(episode.members.as_str())));
    html.push_str(&format!("<span>{}</span>", escape(episode.published_at.as_str())));
    html.push_str(&format!(
        "<span>{}</span>",
        escape(episode.duration_as_string.as_str())
    ));
    html.push_str("</div>");
    html.push_str(&format!(
        r#"<button type="button" class="play-episode" data-episode-id="{}"><img src="/assets/play-green.svg" alt="Tocar episódio"/></button>"#,
        escaped_id
    ));
    html.push_str("</li>");
    html
}

fn episode_table_row(episode: &Episode) -> String {
    let escaped_title = escape(episode.title.as_str());
    let escaped_id = escape(episode.id.as_str());

    let mut html = String::from("<tr>");
    html.push_str(&format!(
        r#"<td class="thumbnail-cell"><img src="{}" alt="{}" width="120" height="120"/></td>"#,
        escape(episode.thumbnail.as_str()),
        escaped_title
    ));
    html.push_str(&format!(
        r#"<td><a href="/episodes/{}">{}</a></td>"#,
        escaped_id, escaped_title
    ));
    html.push_str(&format!("<td>{}</td>", escape(episode.members.as_str())));
    html.push_str(&format!(
        r#"<td class="published-at">{}</td>"#,
        escape(episode.published_at.as_str())
    ));
    html.push_str(&format!(
        "<td>{}</td>",
        escape(episode.duration_as_string.as_str())
    ));
    html.push_str(&format!(
        r#"<td><button type="button" class="play-episode" data-episode-id="{}"><img src="/assets/play-green.svg" alt="Tocar episódio"/></button></td>"#,
        escaped_id
    ));
    html.push_str("</tr>");
    html
}

/// Assemble the full document around a page body
fn page(title: &str, content: &str, payload: &impl Serialize) -> String {
    let mut html = String::from(r#"<!DOCTYPE html><html lang="pt-BR"><head><meta charset="utf-8"/>"#);
    html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1"/>"#);
    html.push_str(&format!(
        "<title>{} | {}</title>",
        escape(title),
        SITE_NAME
    ));
    html.push_str(r#"<link rel="stylesheet" href="/assets/styles.css"/></head><body>"#);
    html.push_str(r#"<div class="app-wrapper"><main>"#);
    html.push_str(&site_header());
    html.push_str(content);
    html.push_str("</main>");
    html.push_str(&player_shell());
    html.push_str("</div>");
    html.push_str(&hydration_island(payload));
    html.push_str(r#"<script src="/assets/player.js" defer></script>"#);
    html.push_str("</body></html>");
    html
}

fn site_header() -> String {
    let today = header_date_label(Local::now().date_naive());

    let mut html = String::from(r#"<header class="site-header">"#);
    html.push_str(&format!(
        r#"<a href="/"><img src="/assets/logo.svg" alt="{}"/></a>"#,
        SITE_NAME
    ));
    html.push_str(&format!("<p>{}</p>", SLOGAN));
    html.push_str(&format!("<span>{}</span>", today));
    html.push_str("</header>");
    html
}

/// The player sidebar, rendered in its empty state
///
/// Playback state lives in the browser session; the client script fills
/// this shell from `GET /api/player/events`.
fn player_shell() -> String {
    let mut html = String::from(r#"<aside class="player-container">"#);

    html.push_str("<header>");
    html.push_str(r#"<img src="/assets/playing.svg" alt=""/>"#);
    html.push_str("<strong>Tocando agora</strong>");
    html.push_str("</header>");

    html.push_str(r#"<div class="empty-player"><strong>Selecione um podcast para ouvir</strong></div>"#);
    html.push_str(r#"<div class="current-episode" hidden>"#);
    html.push_str(r#"<img class="episode-thumbnail" src="" alt=""/>"#);
    html.push_str(r#"<strong class="episode-title"></strong>"#);
    html.push_str(r#"<span class="episode-members"></span>"#);
    html.push_str("</div>");

    html.push_str(r#"<footer class="empty">"#);
    html.push_str(r#"<div class="progress">"#);
    html.push_str(r#"<span class="current-time">00:00:00</span>"#);
    html.push_str(r#"<div class="slider"><div class="empty-slider"></div></div>"#);
    html.push_str(r#"<span class="total-time">00:00:00</span>"#);
    html.push_str("</div>");
    html.push_str(r#"<audio id="player-audio" hidden></audio>"#);
    html.push_str(r#"<div class="buttons">"#);
    html.push_str(r#"<button type="button" id="shuffle-button" disabled><img src="/assets/shuffle.svg" alt="Embaralhar"/></button>"#);
    html.push_str(r#"<button type="button" id="previous-button" disabled><img src="/assets/play-previous.svg" alt="Tocar anterior"/></button>"#);
    html.push_str(r#"<button type="button" id="play-button" class="play-button" disabled><img src="/assets/play.svg" alt="Tocar"/></button>"#);
    html.push_str(r#"<button type="button" id="next-button" disabled><img src="/assets/play-next.svg" alt="Tocar próxima"/></button>"#);
    html.push_str(r#"<button type="button" id="repeat-button" disabled><img src="/assets/repeat.svg" alt="Repetir"/></button>"#);
    html.push_str("</div></footer></aside>");
    html
}

/// Embed the page data as a JSON island for the client script
///
/// `<` is escaped in the payload so no `</script>` sequence inside the data
/// can terminate the island early.
fn hydration_island(payload: &impl Serialize) -> String {
    let json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    let json = json.replace('<', "\\u003c");
    format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        HYDRATION_ELEMENT_ID, json
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, title: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: title.to_string(),
            members: "Diego e Mayk".to_string(),
            thumbnail: format!("http://example.org/{}.jpg", id),
            duration: 3600,
            duration_as_string: "01:00:00".to_string(),
            published_at: "8 jan 21".to_string(),
            url: format!("http://example.org/{}.m4a", id),
            description: String::new(),
        }
    }

    #[test]
    fn test_home_page_sections() {
        let home = HomePage::from_episodes(vec![
            episode("a", "Primeiro"),
            episode("b", "Segundo"),
            episode("c", "Terceiro"),
        ]);
        let html = render_home(&home);

        assert!(html.contains("Últimos lançamentos"));
        assert!(html.contains("Todos os episódios"));
        assert!(html.contains("Primeiro"));
        assert!(html.contains("Terceiro"));
        assert!(html.contains(r#"href="/episodes/a""#));
        assert!(html.contains(r#"href="/episodes/c""#));
        assert!(html.contains("<title>Home | Podarium</title>"));
    }

    #[test]
    fn test_play_buttons_carry_episode_id() {
        let home = HomePage::from_episodes(vec![episode("ep-1", "Um"), episode("ep-2", "Dois")]);
        let html = render_home(&home);

        assert!(html.contains(r#"data-episode-id="ep-1""#));
        assert!(html.contains(r#"data-episode-id="ep-2""#));
    }

    #[test]
    fn test_dynamic_values_are_escaped() {
        let home = HomePage::from_episodes(vec![episode("x", r#"Rust <b> & "tricks""#)]);
        let html = render_home(&home);

        assert!(html.contains("Rust &lt;b&gt; &amp; &quot;tricks&quot;"));
        assert!(!html.contains("Rust <b>"));
    }

    #[test]
    fn test_hydration_island_present_with_page_data() {
        let home = HomePage::from_episodes(vec![episode("a", "Um"), episode("b", "Dois")]);
        let html = render_home(&home);

        assert!(html.contains(r#"id="__PODARIUM_DATA__""#));
        assert!(html.contains(r#""latestEpisodes""#));
        assert!(html.contains(r#""allEpisodes""#));
    }

    #[test]
    fn test_hydration_island_cannot_be_broken_out_of() {
        let home = HomePage::from_episodes(vec![episode(
            "evil",
            "fim</script><script>alert(1)</script>",
        )]);
        let html = render_home(&home);

        // Raw markup never appears: escaped in HTML, \u003c in the island
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("\\u003c/script>"));
    }

    #[test]
    fn test_episode_page_contents() {
        let mut ep = episode("a", "Faladev");
        ep.description = "<p>Uma conversa sobre código aberto</p>".to_string();
        let html = render_episode(&ep);

        assert!(html.contains("<h1>Faladev</h1>"));
        assert!(html.contains("<title>Faladev | Podarium</title>"));
        // Description is HTML from the feed, kept verbatim
        assert!(html.contains("<p>Uma conversa sobre código aberto</p>"));
        assert!(html.contains(r#""episode""#));
    }

    #[test]
    fn test_player_shell_rendered_empty() {
        let home = HomePage::from_episodes(Vec::new());
        let html = render_home(&home);

        assert!(html.contains("Tocando agora"));
        assert!(html.contains("Selecione um podcast para ouvir"));
        assert!(html.contains(r#"id="play-button""#));
    }

    #[test]
    fn test_error_page() {
        let html = render_error_page(502, "Não foi possível carregar os episódios");

        assert!(html.contains("Erro 502"));
        assert!(html.contains("Não foi possível carregar os episódios"));
        assert!(html.contains(r#"<a href="/">"#));
    }
}

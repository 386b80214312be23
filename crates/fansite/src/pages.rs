//! Text renderers for the site pages.
//!
//! Each function maps fetched API data to a printable block, mirroring the
//! sections of the site: hero, synopsis, info cards, statistics, characters,
//! episodes, staff, reviews, recommendations, news, and character detail.
//! Missing data renders as "N/A" rather than failing.

use crate::api::types::{
    Aired, AnimeDetails, Broadcast, CharacterEdge, CharacterFull, EntityRef, Episode, NewsItem,
    Page, Recommendation, Review, StaffEdge,
};

/// Character cap on the characters page
pub const TOP_CHARACTERS: usize = 20;

/// Character cap on the home page preview
pub const PREVIEW_CHARACTERS: usize = 6;

/// Review bodies are trimmed to this many characters
const REVIEW_EXCERPT_CHARS: usize = 280;

/// Hero section: title, japanese title, key stats
pub fn hero(anime: &AnimeDetails) -> String {
    let mut out = String::new();

    let title = anime
        .title_english
        .as_deref()
        .unwrap_or(&anime.title);
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(title.chars().count())));

    if let Some(jp) = &anime.title_japanese {
        out.push_str(&format!("{}\n", jp));
    }

    let score = anime
        .score
        .map(|s| format!("{:.1}", s))
        .unwrap_or_else(|| "N/A".to_string());
    let episodes = anime
        .episodes
        .map(|e| e.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let status = anime.status.as_deref().unwrap_or("Unknown");
    out.push_str(&format!(
        "Score: {}  Episodes: {}  Status: {}\n",
        score, episodes, status
    ));

    out
}

/// Synopsis section
pub fn synopsis(anime: &AnimeDetails) -> String {
    let mut out = String::from("Synopsis\n--------\n");
    match &anime.synopsis {
        Some(text) => out.push_str(&format!("{}\n", text)),
        None => out.push_str("Synopsis not available.\n"),
    }
    out
}

/// Information cards: one "Label: value" line per known field
pub fn info_cards(anime: &AnimeDetails) -> String {
    let premiered = anime.season.as_ref().map(|season| {
        match anime.year {
            Some(year) => format!("{} {}", season, year),
            None => season.clone(),
        }
    });

    let items: Vec<(&str, Option<String>)> = vec![
        ("Type", anime.anime_type.clone()),
        ("Episodes", anime.episodes.map(|e| e.to_string())),
        ("Status", anime.status.clone()),
        ("Aired", Some(format_aired(anime.aired.as_ref()))),
        ("Premiered", premiered),
        ("Broadcast", Some(format_broadcast(anime.broadcast.as_ref()))),
        ("Producers", entity_names(&anime.producers)),
        ("Studios", entity_names(&anime.studios)),
        ("Source", anime.source.clone()),
        ("Genres", entity_names(&anime.genres)),
        ("Themes", entity_names(&anime.themes)),
        ("Demographics", entity_names(&anime.demographics)),
        ("Duration", anime.duration.clone()),
        ("Rating", anime.rating.clone()),
        ("Score", anime.score.map(|s| format!("{:.2} / 10", s))),
        ("Ranked", anime.rank.map(|r| format!("#{}", r))),
        ("Popularity", anime.popularity.map(|p| format!("#{}", p))),
        ("Members", anime.members.map(format_number)),
        ("Favorites", anime.favorites.map(format_number)),
    ];

    let mut out = String::from("Information\n-----------\n");
    for (label, value) in items {
        match value {
            Some(v) if v != "N/A" && !v.is_empty() => {
                out.push_str(&format!("{}: {}\n", label, v));
            }
            _ => {}
        }
    }
    out
}

/// Statistics section
pub fn statistics(anime: &AnimeDetails) -> String {
    let stats = [
        (
            "Score",
            anime
                .score
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Ranked",
            anime
                .rank
                .map(|r| format!("#{}", r))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Popularity",
            anime
                .popularity
                .map(|p| format!("#{}", p))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Members",
            anime
                .members
                .map(format_number)
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Favorites",
            anime
                .favorites
                .map(format_number)
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Episodes",
            anime
                .episodes
                .map(|e| e.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
    ];

    let mut out = String::from("Statistics\n----------\n");
    for (label, value) in stats {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

/// Character grid: name, role, first voice actor
pub fn characters_page(characters: &[CharacterEdge], limit: usize) -> String {
    let mut out = String::from("Characters\n----------\n");

    if characters.is_empty() {
        out.push_str("Character information not available.\n");
        return out;
    }

    for edge in characters.iter().take(limit) {
        let role = edge.role.as_deref().unwrap_or("Unknown");
        out.push_str(&format!("{} ({})", edge.character.name, role));

        if let Some(va) = edge.voice_actors.first() {
            out.push_str(&format!(" - {} ({})", va.person.name, va.language));
        }
        out.push('\n');
    }

    if characters.len() > limit {
        out.push_str(&format!("... and {} more\n", characters.len() - limit));
    }

    out
}

/// Episode list with pagination footer
pub fn episodes_page(page: &Page<Episode>) -> String {
    let mut out = String::from("Episodes\n--------\n");

    if page.data.is_empty() {
        out.push_str("Episode information not available.\n");
        return out;
    }

    for episode in &page.data {
        let title = episode
            .title
            .as_deref()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Episode {}", episode.mal_id));
        let aired = episode
            .aired
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "N/A".to_string());

        out.push_str(&format!("#{} {} ({})", episode.mal_id, title, aired));
        if episode.filler {
            out.push_str(" [filler]");
        }
        if episode.recap {
            out.push_str(" [recap]");
        }
        out.push('\n');
    }

    let current = page.pagination.current_page.unwrap_or(1);
    out.push_str(&format!(
        "Page {} of {}\n",
        current, page.pagination.last_visible_page
    ));

    out
}

/// Staff list: name and positions
pub fn staff_page(staff: &[StaffEdge]) -> String {
    let mut out = String::from("Staff\n-----\n");

    if staff.is_empty() {
        out.push_str("Staff information not available.\n");
        return out;
    }

    for edge in staff {
        if edge.positions.is_empty() {
            out.push_str(&format!("{}\n", edge.person.name));
        } else {
            out.push_str(&format!(
                "{} - {}\n",
                edge.person.name,
                edge.positions.join(", ")
            ));
        }
    }

    out
}

/// Review list with truncated bodies
pub fn reviews_page(page: &Page<Review>) -> String {
    let mut out = String::from("Reviews\n-------\n");

    if page.data.is_empty() {
        out.push_str("No reviews available.\n");
        return out;
    }

    for review in &page.data {
        let score = review
            .score
            .map(|s| format!("{}/10", s))
            .unwrap_or_else(|| "N/A".to_string());
        let date = review
            .date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "N/A".to_string());

        out.push_str(&format!(
            "{} - {} ({})\n",
            review.user.username, score, date
        ));
        if !review.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", review.tags.join(", ")));
        }
        if review.is_spoiler {
            out.push_str("[spoiler]\n");
        }
        out.push_str(&format!("{}\n\n", truncate(&review.review, REVIEW_EXCERPT_CHARS)));
    }

    let current = page.pagination.current_page.unwrap_or(1);
    out.push_str(&format!(
        "Page {} of {}\n",
        current, page.pagination.last_visible_page
    ));

    out
}

/// Recommendation list with vote counts
pub fn recommendations_page(recommendations: &[Recommendation]) -> String {
    let mut out = String::from("Recommendations\n---------------\n");

    if recommendations.is_empty() {
        out.push_str("No recommendations available.\n");
        return out;
    }

    for rec in recommendations {
        out.push_str(&format!("{} ({} votes)\n", rec.entry.title, rec.votes));
    }

    out
}

/// News list: title, date, author, excerpt
pub fn news_page(page: &Page<NewsItem>) -> String {
    let mut out = String::from("News\n----\n");

    if page.data.is_empty() {
        out.push_str("No news available.\n");
        return out;
    }

    for item in &page.data {
        let date = item
            .date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "N/A".to_string());
        let author = item.author_username.as_deref().unwrap_or("unknown");

        out.push_str(&format!("{} ({}, by {})\n", item.title, date, author));
        if let Some(excerpt) = &item.excerpt {
            out.push_str(&format!("{}\n", excerpt));
        }
        out.push('\n');
    }

    let current = page.pagination.current_page.unwrap_or(1);
    out.push_str(&format!(
        "Page {} of {}\n",
        current, page.pagination.last_visible_page
    ));

    out
}

/// Character detail page
pub fn character_page(character: &CharacterFull) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", character.name));
    out.push_str(&format!("{}\n", "=".repeat(character.name.chars().count())));

    if let Some(kanji) = &character.name_kanji {
        out.push_str(&format!("{}\n", kanji));
    }
    if !character.nicknames.is_empty() {
        out.push_str(&format!("Nicknames: {}\n", character.nicknames.join(", ")));
    }
    if let Some(favorites) = character.favorites {
        out.push_str(&format!("Favorites: {}\n", format_number(favorites)));
    }

    if let Some(about) = &character.about {
        out.push_str(&format!("\nAbout\n-----\n{}\n", about));
    }

    if !character.anime.is_empty() {
        out.push_str("\nAnime Appearances\n-----------------\n");
        for appearance in &character.anime {
            let role = appearance.role.as_deref().unwrap_or("Unknown");
            out.push_str(&format!("{} ({})\n", appearance.anime.title, role));
        }
    }

    if !character.manga.is_empty() {
        out.push_str("\nManga Appearances\n-----------------\n");
        for appearance in &character.manga {
            let role = appearance.role.as_deref().unwrap_or("Unknown");
            out.push_str(&format!("{} ({})\n", appearance.manga.title, role));
        }
    }

    if !character.voices.is_empty() {
        out.push_str("\nVoice Actors\n------------\n");
        for voice in &character.voices {
            out.push_str(&format!("{} ({})\n", voice.person.name, voice.language));
        }
    }

    out
}

/// Format an aired range, preferring the preformatted string from MAL
fn format_aired(aired: Option<&Aired>) -> String {
    let Some(aired) = aired else {
        return "N/A".to_string();
    };
    if let Some(s) = &aired.string {
        return s.clone();
    }

    let from = aired
        .from
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "?".to_string());
    let to = aired
        .to
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "?".to_string());
    format!("{} to {}", from, to)
}

/// Format a broadcast slot, preferring the preformatted string from MAL
fn format_broadcast(broadcast: Option<&Broadcast>) -> String {
    let Some(broadcast) = broadcast else {
        return "N/A".to_string();
    };
    if let Some(s) = &broadcast.string {
        return s.clone();
    }

    let formatted = format!(
        "{} at {}",
        broadcast.day.as_deref().unwrap_or(""),
        broadcast.time.as_deref().unwrap_or("")
    );
    let trimmed = formatted.trim();
    if trimmed == "at" {
        "N/A".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an ISO-8601 timestamp as a short date; passes through on parse failure
fn format_date(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format a number with thousands separators
fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Names of entity references joined with commas
fn entity_names(entities: &[EntityRef]) -> Option<String> {
    if entities.is_empty() {
        return None;
    }
    Some(
        entities
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Truncate to at most `max` characters, appending an ellipsis if trimmed
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        CharacterRef, ImageUrls, Images, Pagination, PersonRef, Reviewer, VoiceActor,
    };

    fn images() -> Images {
        Images {
            jpg: ImageUrls::default(),
            webp: None,
        }
    }

    fn sample_details() -> AnimeDetails {
        AnimeDetails {
            mal_id: 1735,
            url: "https://myanimelist.net/anime/1735".to_string(),
            images: images(),
            title: "Naruto: Shippuuden".to_string(),
            title_english: Some("Naruto Shippuden".to_string()),
            title_japanese: Some("ナルト- 疾風伝".to_string()),
            title_synonyms: vec![],
            anime_type: Some("TV".to_string()),
            source: Some("Manga".to_string()),
            episodes: Some(500),
            status: Some("Finished Airing".to_string()),
            airing: false,
            aired: Some(Aired {
                from: Some("2007-02-15T00:00:00+00:00".to_string()),
                to: Some("2017-03-23T00:00:00+00:00".to_string()),
                string: Some("Feb 15, 2007 to Mar 23, 2017".to_string()),
            }),
            duration: Some("23 min per ep".to_string()),
            rating: None,
            score: Some(8.28),
            scored_by: None,
            rank: Some(311),
            popularity: Some(16),
            members: Some(2_600_000),
            favorites: Some(110_000),
            synopsis: Some("It has been two and a half years...".to_string()),
            background: None,
            season: Some("winter".to_string()),
            year: Some(2007),
            broadcast: None,
            producers: vec![],
            licensors: vec![],
            studios: vec![EntityRef {
                mal_id: 1,
                entity_type: "anime".to_string(),
                name: "Pierrot".to_string(),
                url: String::new(),
            }],
            genres: vec![
                EntityRef {
                    mal_id: 1,
                    entity_type: "anime".to_string(),
                    name: "Action".to_string(),
                    url: String::new(),
                },
                EntityRef {
                    mal_id: 2,
                    entity_type: "anime".to_string(),
                    name: "Adventure".to_string(),
                    url: String::new(),
                },
            ],
            explicit_genres: vec![],
            themes: vec![],
            demographics: vec![],
        }
    }

    fn sample_edge(name: &str) -> CharacterEdge {
        CharacterEdge {
            character: CharacterRef {
                mal_id: 17,
                url: String::new(),
                images: images(),
                name: name.to_string(),
            },
            role: Some("Main".to_string()),
            favorites: None,
            voice_actors: vec![VoiceActor {
                person: PersonRef {
                    mal_id: 14,
                    url: String::new(),
                    images: None,
                    name: "Takeuchi, Junko".to_string(),
                },
                language: "Japanese".to_string(),
            }],
        }
    }

    #[test]
    fn test_hero_prefers_english_title() {
        let rendered = hero(&sample_details());
        assert!(rendered.starts_with("Naruto Shippuden\n"));
        assert!(rendered.contains("Score: 8.3"));
        assert!(rendered.contains("Episodes: 500"));
        assert!(rendered.contains("Status: Finished Airing"));
    }

    #[test]
    fn test_info_cards_skip_missing_fields() {
        let rendered = info_cards(&sample_details());
        assert!(rendered.contains("Genres: Action, Adventure"));
        assert!(rendered.contains("Studios: Pierrot"));
        assert!(rendered.contains("Aired: Feb 15, 2007 to Mar 23, 2017"));
        // Rating is None and must not appear
        assert!(!rendered.contains("Rating:"));
    }

    #[test]
    fn test_statistics_formats_numbers() {
        let rendered = statistics(&sample_details());
        assert!(rendered.contains("Members: 2,600,000"));
        assert!(rendered.contains("Ranked: #311"));
    }

    #[test]
    fn test_characters_page_caps_at_limit() {
        let characters: Vec<CharacterEdge> =
            (0..30).map(|i| sample_edge(&format!("Character {}", i))).collect();

        let rendered = characters_page(&characters, TOP_CHARACTERS);
        assert!(rendered.contains("Character 0 (Main) - Takeuchi, Junko (Japanese)"));
        assert!(rendered.contains("Character 19"));
        assert!(!rendered.contains("Character 20 "));
        assert!(rendered.contains("... and 10 more"));
    }

    #[test]
    fn test_characters_page_handles_empty_list() {
        let rendered = characters_page(&[], TOP_CHARACTERS);
        assert!(rendered.contains("Character information not available."));
    }

    #[test]
    fn test_episodes_page_lists_entries_and_pagination() {
        let page = Page {
            data: vec![Episode {
                mal_id: 1,
                url: None,
                title: Some("Homecoming".to_string()),
                title_japanese: None,
                title_romanji: None,
                aired: Some("2007-02-15T00:00:00+00:00".to_string()),
                score: Some(4.1),
                filler: false,
                recap: false,
                forum_url: None,
            }],
            pagination: Pagination {
                last_visible_page: 5,
                has_next_page: true,
                current_page: Some(2),
                items: None,
            },
        };

        let rendered = episodes_page(&page);
        assert!(rendered.contains("#1 Homecoming (Feb 15, 2007)"));
        assert!(rendered.contains("Page 2 of 5"));
    }

    #[test]
    fn test_reviews_page_truncates_long_bodies() {
        let page = Page {
            data: vec![Review {
                mal_id: 1,
                url: None,
                review_type: None,
                reactions: None,
                date: Some("2017-04-01T00:00:00+00:00".to_string()),
                review: "x".repeat(1000),
                score: Some(9),
                tags: vec!["Recommended".to_string()],
                is_spoiler: false,
                is_preliminary: false,
                user: Reviewer {
                    username: "reviewer".to_string(),
                    url: None,
                    images: None,
                },
            }],
            pagination: Pagination {
                last_visible_page: 1,
                has_next_page: false,
                current_page: Some(1),
                items: None,
            },
        };

        let rendered = reviews_page(&page);
        assert!(rendered.contains("reviewer - 9/10 (Apr 1, 2017)"));
        assert!(rendered.contains("Tags: Recommended"));
        assert!(rendered.contains(&format!("{}…", "x".repeat(REVIEW_EXCERPT_CHARS))));
        assert!(!rendered.contains(&"x".repeat(REVIEW_EXCERPT_CHARS + 1)));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(2_600_000), "2,600,000");
    }

    #[test]
    fn test_format_aired_falls_back_to_range() {
        let aired = Aired {
            from: Some("2007-02-15T00:00:00+00:00".to_string()),
            to: None,
            string: None,
        };
        assert_eq!(format_aired(Some(&aired)), "Feb 15, 2007 to ?");
        assert_eq!(format_aired(None), "N/A");
    }

    #[test]
    fn test_format_broadcast() {
        let broadcast = Broadcast {
            day: Some("Thursdays".to_string()),
            time: Some("19:30".to_string()),
            timezone: None,
            string: None,
        };
        assert_eq!(format_broadcast(Some(&broadcast)), "Thursdays at 19:30");
        assert_eq!(format_broadcast(None), "N/A");
    }
}

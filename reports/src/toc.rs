//! README table of contents for the numbered article series.

use log::warn;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_HEADER: &str = "# 🎄「au Starlink DirectでDTC」アドベントカレンダー2025🎄";
pub const DEFAULT_BASE_URL: &str = "https://github.com/muojp/ac2025/blob/main";

fn article_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{2}\.md$").expect("static pattern"))
}

/// Two-digit `NN.md` files among `files`, sorted.
pub fn select_articles(files: &[String]) -> Vec<String> {
    let mut articles: Vec<String> = files
        .iter()
        .filter(|name| article_pattern().is_match(name))
        .cloned()
        .collect();
    articles.sort();
    articles
}

/// Text of the first level-1 heading.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

pub fn entry(file: &str, title: &str, base_url: &str) -> Option<String> {
    let day: u32 = file.strip_suffix(".md")?.parse().ok()?;
    Some(format!("- 🎄{}日目🎄 [{}]({}/{})", day, title, base_url, file))
}

/// One entry per article with a readable title, in article order.
pub fn collect_entries(dir: &Path, articles: &[String], base_url: &str) -> Vec<String> {
    articles
        .iter()
        .filter_map(|file| match fs::read_to_string(dir.join(file)) {
            Ok(markdown) => {
                let title = extract_title(&markdown)?;
                entry(file, &title, base_url)
            }
            Err(err) => {
                warn!("unable to read {}: {}", file, err);
                None
            }
        })
        .collect()
}

pub fn render_readme(header: &str, entries: &[String]) -> String {
    format!("{}\n\n{}\n", header, entries.join("\n"))
}

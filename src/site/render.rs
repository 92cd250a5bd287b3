// Render stage.
// Turns the merged record list into HTML fragments, splices them into the
// base template, and writes the static outputs.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;

use crate::error::{FolioError, Result};
use crate::github::Repository;

use super::shim::Localized;

/// Marker in the base template replaced by the fragment list.
const PLACEHOLDER: &str = "<!-- project list here -->";

/// Empty homepage anchor pattern stripped from the final document.
const EMPTY_READ_MORE: &str = r#"<a href="" target="_blank">Read More</a>"#;

/// Sort most recently pushed first. Never-pushed repositories sink to
/// the end.
pub fn sort_by_pushed(projects: &mut [Repository]) {
    projects.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
}

/// Render one `<figure>` fragment for a repository.
pub fn render_fragment(repo: &Repository, loc: &Localized) -> String {
    let image = repo.full_name.to_lowercase();
    let updated = repo.pushed_at.unwrap_or(repo.updated_at);

    let read_more = match repo.homepage_text() {
        "" => String::new(),
        homepage => format!(
            "\n\t\t\t\t<a href=\"{}\" target=\"_blank\">Read More</a>",
            homepage
        ),
    };

    format!(
        r#"
		<figure class="project">
			<div class="preview">
				<img src="projects/{image}" alt="" onerror="this.src='placeholder.jpg'" />
			</div>
			<div class="date">
				<span class="update" data-date="{updated_en}">更新:{updated_zh}</span>
				<span class="create" data-date="{created_en}">创建:{created_zh}</span>
			</div>
			<figcaption>
				<h2 data-en="{en_name}">{zh_name}</h2>
				<p data-en="{en_description}">{zh_description}</p>
				<a href="{url}" target="_blank" rel="noreferrer nofollow">GitHub</a>{read_more}
			</figcaption>
		</figure>"#,
        image = image,
        updated_en = format_date_en(&updated),
        updated_zh = format_date_zh(&updated),
        created_en = format_date_en(&repo.created_at),
        created_zh = format_date_zh(&repo.created_at),
        en_name = loc.en_name,
        zh_name = loc.zh_name,
        en_description = loc.en_description,
        zh_description = loc.zh_description,
        url = repo.html_url,
        read_more = read_more,
    )
}

/// Resolve shims and concatenate fragments for an already-sorted list.
pub fn render_fragments(projects: &[Repository], config_dir: &Path) -> Result<String> {
    let mut fragments = String::new();
    for project in projects {
        let loc = Localized::resolve(project, config_dir)?;
        fragments.push_str(&render_fragment(project, &loc));
    }
    Ok(fragments)
}

/// Splice the fragment list into the base template at the marker.
pub fn render_page(template: &str, fragments: &str) -> Result<String> {
    if !template.contains(PLACEHOLDER) {
        return Err(FolioError::Template(format!(
            "template is missing the {:?} marker",
            PLACEHOLDER
        )));
    }
    let page = template.replacen(PLACEHOLDER, fragments, 1);
    Ok(page.replace(EMPTY_READ_MORE, ""))
}

/// Write the rendered page and the merged project listing.
pub fn write_outputs(out_dir: &Path, html: &str, projects: &[Repository]) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    write_file(&out_dir.join("index.html"), html.as_bytes())?;

    let listing = serde_json::to_string_pretty(projects)?;
    write_file(&out_dir.join("projects.json"), listing.as_bytes())?;

    info!("wrote {} projects to {}", projects.len(), out_dir.display());
    Ok(())
}

/// Write atomically via temp file.
fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

fn format_date_en(date: &DateTime<Utc>) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

fn format_date_zh(date: &DateTime<Utc>) -> String {
    date.format("%Y年%-m月%-d日").to_string()
}

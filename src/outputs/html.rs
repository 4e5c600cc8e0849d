//! Rendering the aggregated article list into the final HTML page.
//!
//! The page is self-contained: inline CSS, a tab bar with one filter per
//! source, one card per article, and a short inline script driving the tab
//! filtering. Each card carries the article's data as `data-*` attributes
//! so the page-local script can work without refetching anything. All
//! interpolated values are escaped here; nothing upstream is trusted.

use crate::models::{Article, Source};

/// Render the complete HTML document.
pub fn render_page(articles: &[Article], sources: &[Source], generated_at: &str) -> String {
    let tabs = render_tabs(sources);
    let cards: String = articles.iter().map(render_card).collect();
    let year = &generated_at[..4.min(generated_at.len())];

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="referrer" content="no-referrer">
<meta name="description" content="每日自动更新的科技新闻聚合页">
<title>科技早报</title>
<style>
:root {{ --primary: #d32f2f; --bg: #f5f7fa; --card-bg: #fff; --text: #2c3e50; }}
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif; background: var(--bg); margin: 0; color: var(--text); }}
header {{ background: var(--primary); color: #fff; padding: 1rem 0; position: sticky; top: 0; z-index: 999; }}
.header-content {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; display: flex; justify-content: space-between; align-items: center; }}
.brand {{ font-size: 1.5rem; font-weight: bold; }}
.time {{ font-size: .85rem; opacity: .8; }}
.tabs {{ max-width: 1200px; margin: 1rem auto 0; padding: 0 15px; display: flex; flex-wrap: wrap; gap: 8px; }}
.tab {{ border: 1px solid #ddd; background: #fff; border-radius: 16px; padding: 4px 14px; cursor: pointer; font-size: .85rem; }}
.tab.active {{ background: var(--primary); border-color: var(--primary); color: #fff; }}
main {{ max-width: 1200px; margin: 1rem auto 2rem; padding: 0 15px; display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 20px; }}
.card {{ background: var(--card-bg); border-radius: 10px; overflow: hidden; border: 1px solid #eaeaea; }}
.card-link {{ text-decoration: none; color: inherit; display: block; height: 100%; }}
.card-img {{ height: 150px; background-size: cover; background-position: center; }}
.no-img {{ display: flex; align-items: center; justify-content: center; background: #e3e5e8; color: #999; font-weight: bold; font-size: 1.2rem; }}
.card-content {{ padding: 15px; }}
.card-meta {{ display: flex; justify-content: space-between; font-size: .75rem; color: #888; margin-bottom: 8px; }}
.source-tag {{ background: #fef2f2; color: var(--primary); padding: 2px 6px; border-radius: 4px; }}
.card-title {{ margin: 0 0 6px; font-size: 1rem; line-height: 1.5; }}
.card-summary {{ margin: 0; font-size: .82rem; color: #666; line-height: 1.5; }}
footer {{ text-align: center; padding: 3rem 0; color: #999; font-size: .85rem; }}
@media (max-width: 600px) {{ main {{ grid-template-columns: 1fr; }} }}
</style>
</head>
<body>
<header>
<div class="header-content">
<div class="brand">科技早报</div>
<div class="time">更新: {generated_at}</div>
</div>
</header>
<nav class="tabs">
<button class="tab active" data-filter="all">全部</button>
{tabs}</nav>
<main>
{cards}</main>
<footer>
<p>更新于 {generated_at} · 共 {count} 条</p>
<p>&copy; {year} 科技早报</p>
</footer>
<script>
document.querySelectorAll('.tab').forEach(function (tab) {{
  tab.addEventListener('click', function () {{
    document.querySelectorAll('.tab').forEach(function (t) {{ t.classList.remove('active'); }});
    tab.classList.add('active');
    var filter = tab.dataset.filter;
    document.querySelectorAll('.card').forEach(function (card) {{
      card.style.display = (filter === 'all' || card.dataset.source === filter) ? '' : 'none';
    }});
  }});
}});
</script>
</body>
</html>
"#,
        count = articles.len(),
    )
}

fn render_tabs(sources: &[Source]) -> String {
    sources
        .iter()
        .map(|s| {
            format!(
                "<button class=\"tab\" data-filter=\"{}\">{}</button>\n",
                escape_html(&s.id),
                escape_html(&s.name)
            )
        })
        .collect()
}

fn render_card(article: &Article) -> String {
    let img_html = match &article.image {
        Some(url) => format!(
            "<div class=\"card-img\" style=\"background-image: url('{}');\"></div>",
            escape_html(url)
        ),
        None => format!(
            "<div class=\"card-img no-img\"><span>{}</span></div>",
            escape_html(&article.source_name)
        ),
    };

    format!(
        r#"<article class="card" data-source="{source_id}" data-title="{title}" data-link="{link}" data-date="{date}" data-body="{body}">
<a href="{link}" target="_blank" rel="noopener" class="card-link">
{img_html}
<div class="card-content">
<div class="card-meta">
<span class="source-tag">{source_name}</span>
<span class="time-tag">{date}</span>
</div>
<h3 class="card-title">{title}</h3>
<p class="card-summary">{summary}</p>
</div>
</a>
</article>
"#,
        source_id = escape_html(&article.source_id),
        title = escape_html(&article.title),
        link = escape_html(&article.link),
        date = escape_html(&article.date),
        body = escape_html(&article.body),
        source_name = escape_html(&article.source_name),
        summary = escape_html(&article.summary),
    )
}

/// Escape a value for interpolation into HTML text or attribute position.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

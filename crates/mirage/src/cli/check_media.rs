//! `check-media` command handler.

use mirage_core::OrderToken;
use mirage_error::MirageResult;
use mirage_server::{FeedClient, FeedSession, MediaReport, survey};
use mirage_storage::download_url;
use std::fmt::Write;
use std::time::Duration;

/// Walk the gallery at `url` to the end of one tour, printing as it goes.
///
/// Video links in the summary are built against `public_url`, the bucket's
/// public base URL.
pub async fn check_media(
    url: &str,
    public_url: &str,
    order: Option<u32>,
    timeout: Duration,
) -> MirageResult<MediaReport> {
    let client = FeedClient::new(url, timeout)?;
    let mut session = match order {
        Some(seed) => FeedSession::with_order(client, OrderToken::new(seed)),
        None => FeedSession::new(client),
    };

    println!("Checking media served by {url}");
    let report = survey(&mut session, |index, page| {
        let videos = page.items().iter().filter(|item| item.is_video()).count();
        println!(
            "Page {}: {} items ({} videos, {} images) order={}",
            index + 1,
            page.items().len(),
            videos,
            page.items().len() - videos,
            page.order()
        );
    })
    .await?;

    print!("{}", render_report(&report, session.order(), public_url));
    Ok(report)
}

/// Summary printed after a survey; each video is listed with its direct link.
pub fn render_report(
    report: &MediaReport,
    order: Option<OrderToken>,
    public_url: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    if !report.videos.is_empty() {
        let _ = writeln!(out, "Videos:");
        for key in &report.videos {
            let _ = writeln!(out, "  {key}  {}", download_url(public_url, key));
        }
    }
    let _ = writeln!(out, "Summary:");
    if let Some(order) = order {
        let _ = writeln!(out, "  order:  {order}");
    }
    let _ = writeln!(out, "  pages:  {}", report.pages);
    let _ = writeln!(out, "  items:  {}", report.items);
    let _ = writeln!(out, "  videos: {}", report.videos.len());
    let _ = writeln!(out, "  images: {}", report.images());
    out
}

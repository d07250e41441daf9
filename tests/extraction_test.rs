mod common;

use common::FakeSession;
use job_scout::models::{catalog, Extraction, FieldQueries};
use job_scout::services::FieldExtractor;
use job_scout::{DriverSession, JobPosting, Source};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

async fn extract_card(html: &str, source: Source, extraction: &Extraction) -> Option<JobPosting> {
    let driver = FakeSession::new().with_page(html);
    let card = driver
        .find_first(".card")
        .await
        .expect("查找卡片失败")
        .expect("夹具中没有卡片");
    FieldExtractor::new(source, extraction).extract(&driver, &card).await
}

fn linkedin_extraction() -> Extraction {
    catalog::linkedin().extraction
}

#[tokio::test]
async fn card_without_title_element_is_skipped() {
    let html = r#"<div class="card"><span class="job-card-container__company-name">Globant</span></div>"#;
    let posting = extract_card(html, Source::LinkedIn, &linkedin_extraction()).await;
    assert!(posting.is_none());
}

#[tokio::test]
async fn card_with_blank_title_is_skipped() {
    let html = r#"<div class="card"><a class="job-card-list__title" href="/x">   </a></div>"#;
    let posting = extract_card(html, Source::LinkedIn, &linkedin_extraction()).await;
    assert!(posting.is_none());
}

#[tokio::test]
async fn missing_fields_stay_empty_on_fixed_sources() {
    let html = r#"<div class="card"><a class="job-card-list__title" href="https://www.linkedin.com/jobs/view/9">  Data
        Scientist </a></div>"#;
    let posting = extract_card(html, Source::LinkedIn, &linkedin_extraction())
        .await
        .expect("应该产出记录");

    assert_eq!(posting.title, "Data Scientist");
    assert_eq!(posting.company, "");
    assert_eq!(posting.location, "");
    assert_eq!(posting.posted_date, "");
    assert_eq!(
        posting.job_url.as_deref(),
        Some("https://www.linkedin.com/jobs/view/9")
    );
    assert_eq!(posting.source, Source::LinkedIn);
}

#[tokio::test]
async fn fixed_source_only_tries_first_selector() {
    let extraction = Extraction::Fixed(FieldQueries {
        title: strings(&[".missing", ".title"]),
        company: vec![],
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card"><h3 class="title">QA</h3></div>"#;
    assert!(extract_card(html, Source::Indeed, &extraction).await.is_none());
}

#[tokio::test]
async fn cascade_uses_third_candidate() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&[".first", ".second", ".third"]),
        company: strings(&[".co-a", ".co-b", ".co-c"]),
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card">
        <span class="third">Backend Developer</span>
        <span class="co-c">Sofka</span>
    </div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.title, "Backend Developer");
    assert_eq!(posting.company, "Sofka");
}

#[tokio::test]
async fn invalid_selector_counts_as_miss() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&["[[[", "h2"]),
        company: strings(&["]]]", ".company"]),
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card"><h2>Dev</h2><span class="company">ACME</span></div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.title, "Dev");
    assert_eq!(posting.company, "ACME");
}

#[tokio::test]
async fn unreadable_field_stays_empty() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&["h2"]),
        company: strings(&[".company"]),
        location: vec![],
        date: vec![],
    });
    let driver = FakeSession::new()
        .with_page(r#"<div class="card"><h2>Dev</h2><span class="company">ACME</span></div>"#)
        .broken_text(".company");
    let card = driver.find_first(".card").await.unwrap().unwrap();

    let posting = FieldExtractor::new(Source::BuscoJobsUY, &extraction)
        .extract(&driver, &card)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.title, "Dev");
    assert_eq!(posting.company, "");
}

#[tokio::test]
async fn cascade_stops_at_first_match() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&[".first", ".second", ".third"]),
        company: vec![],
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card">
        <span class="third">Third</span>
        <span class="second">Second</span>
    </div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.title, "Second");
}

#[tokio::test]
async fn cascade_title_link_wins_over_other_links() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&["a.title"]),
        company: vec![],
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card">
        <a href="/empresa/globant">Globant</a>
        <a class="title" href="/oferta/7">Data Engineer</a>
    </div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.job_url.as_deref(), Some("/oferta/7"));
}

#[tokio::test]
async fn non_link_title_falls_back_to_first_link() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&["h2"]),
        company: vec![],
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card">
        <h2>Data Engineer</h2>
        <a>sin enlace</a>
        <a href="/oferta/8">Ver</a>
        <a href="/oferta/9">Otra</a>
    </div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.job_url.as_deref(), Some("/oferta/8"));
}

#[tokio::test]
async fn card_without_any_link_has_no_url() {
    let extraction = Extraction::Cascade(FieldQueries {
        title: strings(&["h2"]),
        company: vec![],
        location: vec![],
        date: vec![],
    });
    let html = r#"<div class="card"><h2>Tester</h2></div>"#;

    let posting = extract_card(html, Source::BuscoJobsUY, &extraction)
        .await
        .expect("应该产出记录");
    assert_eq!(posting.job_url, None);
}

#[tokio::test]
async fn generic_profile_without_title_key_yields_nothing() {
    let profile = job_scout::models::SelectorProfile {
        job_listings: Some(".card".to_string()),
        company: Some(".company".to_string()),
        ..Default::default()
    };
    let generic = job_scout::SourceProfile::generic("Example", "https://jobs.example.com", &profile);
    let html = r#"<div class="card"><h2>Dev</h2><span class="company">ACME</span></div>"#;

    assert!(extract_card(html, Source::Generic, &generic.extraction).await.is_none());
}

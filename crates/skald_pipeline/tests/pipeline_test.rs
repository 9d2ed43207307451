//! End-to-end pipeline tests over a scripted completion backend.

mod test_utils;

use skald_core::{PaperMetaBuilder, StoryRequest};
use skald_error::CompletionErrorKind;
use skald_pipeline::{FALLBACK_SCENE_TITLES, StoryPipeline, SummarizeRequest, Summarizer, WhatIfAdvisor, PaperArchive};
use test_utils::MockBackend;

const THREE_PART_STORY: &str = "Part 1: Setup\n\nAstronauts drift.\n\n\
                                Part 2: Conflict\n\nBones weaken.\n\n\
                                Part 3: Resolution\n\nA cure is found.";

#[tokio::test]
async fn generates_three_scenes_from_marked_story() -> anyhow::Result<()> {
    let backend = MockBackend::success(THREE_PART_STORY);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("bone loss in microgravity");

    let story = pipeline.generate(&request, None).await?;

    assert!(!story.is_fallback);
    assert_eq!(story.title, "bone loss in microgravity");
    assert_eq!(story.full_text, THREE_PART_STORY);
    assert_eq!(story.scenes.len(), 3);
    assert_eq!(story.scenes[0].text, "Astronauts drift.");
    assert_eq!(story.scenes[1].text, "Bones weaken.");
    assert_eq!(story.scenes[2].text, "A cure is found.");
    assert_eq!(backend.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn scene_parts_are_contiguous_and_carry_image_urls() -> anyhow::Result<()> {
    let backend = MockBackend::success(THREE_PART_STORY);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_reference("https://example.org/paper/42");

    let story = pipeline.generate(&request, None).await?;

    for (i, scene) in story.scenes.iter().enumerate() {
        assert_eq!(scene.part, (i + 1) as u32);
        let url = scene.image_url.as_deref().unwrap();
        assert!(url.starts_with("https://image.pollinations.ai/prompt/"));
        assert!(url.ends_with("?width=1024&height=768&model=flux"));
    }
    Ok(())
}

#[tokio::test]
async fn invalid_request_never_reaches_backend() {
    let backend = MockBackend::success(THREE_PART_STORY);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::builder().build().unwrap();

    let result = pipeline.generate(&request, None).await;

    let err = result.unwrap_err();
    assert!(err.is_invalid_request());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn timeout_degrades_to_fallback_story() -> anyhow::Result<()> {
    let backend = MockBackend::failure(CompletionErrorKind::TimedOut(25));
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("plant growth");

    let story = pipeline.generate(&request, None).await?;

    assert!(story.is_fallback);
    assert_eq!(story.scenes.len(), FALLBACK_SCENE_TITLES.len());
    for (scene, title) in story.scenes.iter().zip(FALLBACK_SCENE_TITLES) {
        assert!(scene.text.starts_with(&format!("{title}: ")));
        assert!(scene.image_url.is_some());
    }
    assert_eq!(backend.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn upstream_status_error_degrades_to_fallback() -> anyhow::Result<()> {
    let backend = MockBackend::failure(CompletionErrorKind::Status {
        status: 429,
        message: "rate limited".into(),
    });
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("radiation shielding");

    let story = pipeline.generate(&request, None).await?;
    assert!(story.is_fallback);
    assert_eq!(story.scenes.len(), FALLBACK_SCENE_TITLES.len());
    Ok(())
}

#[tokio::test]
async fn transport_error_degrades_to_fallback() -> anyhow::Result<()> {
    let backend = MockBackend::failure(CompletionErrorKind::Transport("connection reset".into()));
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("muscle atrophy");

    let story = pipeline.generate(&request, None).await?;
    assert!(story.is_fallback);
    assert_eq!(story.scenes.len(), FALLBACK_SCENE_TITLES.len());
    Ok(())
}

#[tokio::test]
async fn empty_response_degrades_to_fallback() -> anyhow::Result<()> {
    let backend = MockBackend::failure(CompletionErrorKind::EmptyResponse);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("seed germination");

    let story = pipeline.generate(&request, None).await?;
    assert!(story.is_fallback);
    assert_eq!(story.scenes.len(), FALLBACK_SCENE_TITLES.len());
    Ok(())
}

#[tokio::test]
async fn unsplittable_text_degrades_to_fallback() -> anyhow::Result<()> {
    let backend = MockBackend::success("   \n\n   ");
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("tardigrades");

    let story = pipeline.generate(&request, None).await?;
    assert!(story.is_fallback);
    Ok(())
}

#[tokio::test]
async fn fallback_uses_paper_metadata() -> anyhow::Result<()> {
    let backend = MockBackend::failure(CompletionErrorKind::TimedOut(25));
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("bone loss");
    let meta = PaperMetaBuilder::default()
        .title("Bone Loss in Murine Hindlimbs")
        .organism("Mus musculus")
        .mission("Bion-M1")
        .build()?;

    let story = pipeline.generate(&request, Some(&meta)).await?;

    assert!(story.is_fallback);
    assert_eq!(story.title, "Bone Loss in Murine Hindlimbs");
    assert!(story.scenes[1].text.contains("Mus musculus"));
    assert!(story.scenes[1].text.contains("Bion-M1"));
    Ok(())
}

#[tokio::test]
async fn single_paragraph_story_yields_single_scene() -> anyhow::Result<()> {
    let long = "A single paragraph long enough to survive the length filter, \
                telling the whole story in one breath.";
    let backend = MockBackend::success(long);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::from_topic("algae farming");

    let story = pipeline.generate(&request, None).await?;

    assert!(!story.is_fallback);
    assert_eq!(story.scenes.len(), 1);
    assert_eq!(story.scenes[0].part, 1);
    Ok(())
}

#[tokio::test]
async fn reference_request_prefers_reference_prompt() -> anyhow::Result<()> {
    let backend = MockBackend::success(THREE_PART_STORY);
    let pipeline = StoryPipeline::new(&backend);
    let request = StoryRequest::builder()
        .topic("ignored topic")
        .reference("https://example.org/paper/7")
        .build()?;

    pipeline.generate(&request, None).await?;

    let sent = backend.last_request().unwrap();
    let user = &sent.messages[1].content;
    assert!(user.contains("https://example.org/paper/7"));
    assert!(user.contains("Discovery"));
    Ok(())
}

#[tokio::test]
async fn summarizer_sends_text_as_prompt() -> anyhow::Result<()> {
    let backend = MockBackend::success("A tidy summary.");
    let summarizer = Summarizer::new(&backend);

    let summary = summarizer
        .summarize(&SummarizeRequest::from_text("Full paper text here."))
        .await?;

    assert_eq!(summary, "A tidy summary.");
    let sent = backend.last_request().unwrap();
    assert_eq!(sent.messages[1].content, "Full paper text here.");
    assert_eq!(sent.temperature, None);
    Ok(())
}

#[tokio::test]
async fn summarizer_builds_title_and_link_prompt() -> anyhow::Result<()> {
    let backend = MockBackend::success("A tidy summary.");
    let summarizer = Summarizer::new(&backend);

    summarizer
        .summarize(&SummarizeRequest::from_paper(
            "Bone loss in murine hindlimbs",
            "https://example.org/paper/42",
        ))
        .await?;

    let sent = backend.last_request().unwrap();
    assert_eq!(
        sent.messages[1].content,
        "Summarize this space biology paper titled \"Bone loss in murine hindlimbs\". \
         Paper link: https://example.org/paper/42"
    );
    Ok(())
}

#[tokio::test]
async fn summarizer_defaults_missing_link() -> anyhow::Result<()> {
    let backend = MockBackend::success("A tidy summary.");
    let summarizer = Summarizer::new(&backend);
    let request = SummarizeRequest {
        text: None,
        title: Some("Radiation response of Arabidopsis".into()),
        link: None,
    };

    summarizer.summarize(&request).await?;

    let sent = backend.last_request().unwrap();
    assert_eq!(
        sent.messages[1].content,
        "Summarize this space biology paper titled \"Radiation response of Arabidopsis\". \
         Paper link: (not provided)"
    );
    Ok(())
}

#[tokio::test]
async fn summarizer_treats_blank_text_as_absent() {
    let backend = MockBackend::success("unused");
    let summarizer = Summarizer::new(&backend);

    let err = summarizer
        .summarize(&SummarizeRequest::from_text("   \n  "))
        .await
        .unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn summarizer_falls_through_blank_text_to_title() -> anyhow::Result<()> {
    let backend = MockBackend::success("A tidy summary.");
    let summarizer = Summarizer::new(&backend);
    let request = SummarizeRequest {
        text: Some("   ".into()),
        title: Some("Immune dysregulation on ISS".into()),
        link: None,
    };

    summarizer.summarize(&request).await?;

    let sent = backend.last_request().unwrap();
    assert!(sent.messages[1].content.contains("Immune dysregulation on ISS"));
    assert_eq!(backend.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn summarizer_rejects_empty_request() {
    let backend = MockBackend::success("unused");
    let summarizer = Summarizer::new(&backend);

    let err = summarizer
        .summarize(&SummarizeRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn whatif_sets_conservative_sampling() -> anyhow::Result<()> {
    let backend = MockBackend::success("**Answer:** Bones demineralize.");
    let archive = PaperArchive::from_csv_str(
        "PMC_ID,Title\nPMC001,Bone loss in murine hindlimbs\n",
    );
    let advisor = WhatIfAdvisor::new(&backend, archive);

    let answer = advisor.answer("What happens to bone in space?").await?;

    assert!(answer.contains("demineralize"));
    let sent = backend.last_request().unwrap();
    assert_eq!(sent.temperature, Some(0.7));
    assert_eq!(sent.max_tokens, Some(500));
    assert!(sent.messages[1].content.contains("PMC001"));
    Ok(())
}

#[tokio::test]
async fn whatif_propagates_upstream_failure() {
    let backend = MockBackend::failure(CompletionErrorKind::EmptyResponse);
    let advisor = WhatIfAdvisor::new(&backend, PaperArchive::default());

    let result = advisor.answer("What if plants grew on Mars?").await;
    assert!(result.is_err());
}

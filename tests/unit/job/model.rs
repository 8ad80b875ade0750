use super::*;

#[test]
fn new_job_seeds_pending_slide_statuses() {
    let id = Uuid::new_v4();
    let job = GenerationJob::new(id, "content-1", &[1, 2, 3]);
    assert_eq!(job.status, Status::Pending);
    assert_eq!(job.progress, 0);
    assert_eq!(job.total_items, 3);
    assert_eq!(job.completed_items, 0);
    assert_eq!(job.metadata.slide_statuses.len(), 3);
    assert!(job
        .metadata
        .slide_statuses
        .iter()
        .all(|s| s.status == Status::Pending && s.error.is_none()));
    assert_eq!(job.slide_status(2).unwrap().slide_number, 2);
    assert!(job.slide_status(9).is_none());
}

#[test]
fn terminal_statuses_are_exactly_completed_and_failed() {
    assert!(!Status::Pending.is_terminal());
    assert!(!Status::Generating.is_terminal());
    assert!(Status::Completed.is_terminal());
    assert!(Status::Failed.is_terminal());
}

#[test]
fn status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Status::Generating).unwrap(), "\"generating\"");
    assert_eq!(
        serde_json::from_str::<Status>("\"completed\"").unwrap(),
        Status::Completed
    );
}

#[test]
fn job_record_survives_serde() {
    let job = GenerationJob::new(Uuid::new_v4(), "c", &[1, 2]);
    let json = serde_json::to_string(&job).unwrap();
    let back: GenerationJob = serde_json::from_str(&json).unwrap();
    assert_eq!(back, job);
}

#[test]
fn content_image_data_serializes_as_base64() {
    let img = ContentImage {
        id: Uuid::new_v4(),
        content_id: "c".to_owned(),
        prompt: "Carousel slide 1".to_owned(),
        data: vec![0x89, 0x50, 0x4E, 0x47],
        is_primary: true,
        format: "png".to_owned(),
        width: 1080,
        height: 1350,
        aspect_ratio: "4:5".to_owned(),
        generator: "caravel-compositor".to_owned(),
        created_at: Utc::now(),
    };
    let json = serde_json::to_value(&img).unwrap();
    assert_eq!(json["data"], "iVBORw==");
    let back: ContentImage = serde_json::from_value(json).unwrap();
    assert_eq!(back.data, img.data);
}

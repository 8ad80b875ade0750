use super::*;
use crate::design::context::DesignInput;
use crate::foundation::error::CaravelError;
use crate::store::memory::FixedImageGenerator;
use crate::store::ImageGenerator;

use async_trait::async_trait;

fn design() -> DesignContext {
    crate::design::resolve(&DesignInput::default())
}

struct FailingGenerator;

#[async_trait]
impl ImageGenerator for FailingGenerator {
    fn has_credentials(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str, _aspect: &str) -> crate::CaravelResult<Vec<u8>> {
        Err(CaravelError::background("service exploded"))
    }
}

struct EmptyGenerator;

#[async_trait]
impl ImageGenerator for EmptyGenerator {
    fn has_credentials(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str, _aspect: &str) -> crate::CaravelResult<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn supplied_background_is_returned_unchanged() {
    let gen = FailingGenerator;
    let provider = BackgroundProvider::new(&gen);
    let bytes = vec![1u8, 2, 3, 4];
    let bg = provider
        .acquire(&design(), "typography", Some(bytes.clone()), Canvas::carousel())
        .await
        .unwrap();
    assert_eq!(bg.bytes.as_deref().map(|b| b.as_slice()), Some(&bytes[..]));
    assert!(!bg.generated);
    assert!(bg.error.is_none());
}

#[tokio::test]
async fn missing_credentials_degrade_to_absent() {
    let gen = FixedImageGenerator::without_credentials();
    let provider = BackgroundProvider::new(&gen);
    let bg = provider
        .acquire(&design(), "typography", None, Canvas::carousel())
        .await
        .unwrap();
    assert!(bg.bytes.is_none());
    assert!(!bg.generated);
    assert!(bg.error.as_deref().unwrap().contains("credentials"));
}

#[tokio::test]
async fn generator_failure_degrades_to_absent() {
    let gen = FailingGenerator;
    let provider = BackgroundProvider::new(&gen);
    let bg = provider
        .acquire(&design(), "typography", None, Canvas::carousel())
        .await
        .unwrap();
    assert!(bg.bytes.is_none());
    assert!(bg.error.as_deref().unwrap().contains("service exploded"));
}

#[tokio::test]
async fn empty_service_payload_degrades_to_absent() {
    let gen = EmptyGenerator;
    let provider = BackgroundProvider::new(&gen);
    let bg = provider
        .acquire(&design(), "typography", None, Canvas::carousel())
        .await
        .unwrap();
    assert!(bg.bytes.is_none());
    assert!(bg.error.is_some());
}

#[tokio::test]
async fn successful_generation_marks_generated() {
    let gen = FixedImageGenerator::with_bytes(vec![9u8; 32]);
    let provider = BackgroundProvider::new(&gen);
    let bg = provider
        .acquire(&design(), "typography", None, Canvas::carousel())
        .await
        .unwrap();
    assert_eq!(bg.bytes.as_deref().map(|b| b.len()), Some(32));
    assert!(bg.generated);
    assert!(bg.error.is_none());
}

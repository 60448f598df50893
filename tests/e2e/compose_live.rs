//! Live compose test

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use img2haiku_rs::config::UpstreamConfig;
    use img2haiku_rs::{HaikuProvider, OpenAIProvider, build_prompt};

    #[tokio::test]
    #[ignore]
    async fn test_live_compose() {
        crate::skip_without_env!("OPENAI_API_KEY");
        crate::skip_without_env!("HAIKU_E2E_IMAGE");

        let image = std::fs::read(std::env::var("HAIKU_E2E_IMAGE").unwrap()).unwrap();
        let provider = OpenAIProvider::new(UpstreamConfig {
            api_key: std::env::var("OPENAI_API_KEY").unwrap(),
            ..Default::default()
        })
        .unwrap();

        let prompt = build_prompt("English", &["Calm".to_string()]).unwrap();
        let haiku = provider
            .compose(&prompt, &STANDARD.encode(image))
            .await
            .expect("live compose");

        assert_eq!(haiku.haiku.lines().count(), 3, "haiku: {:?}", haiku.haiku);
        assert!(!haiku.description.is_empty());
    }
}

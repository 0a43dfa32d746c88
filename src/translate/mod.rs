pub mod client;
pub mod polarity;

pub use client::{DisabledTranslator, GoogleTranslator, TranslateConfig, Translator};
pub use polarity::polarity;

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::Translator;

    /// Fixed-mapping translator for unit tests
    pub struct StubTranslator {
        translations: HashMap<String, String>,
        fail: bool,
    }

    impl StubTranslator {
        /// Translator that returns the mapped text, failing on unknown input
        pub fn with_translations(pairs: &[(&str, &str)]) -> Self {
            Self {
                translations: pairs
                    .iter()
                    .map(|(arabic, english)| (arabic.to_string(), english.to_string()))
                    .collect(),
                fail: false,
            }
        }

        /// Translator that fails every call
        pub fn failing() -> Self {
            Self {
                translations: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl Translator for StubTranslator {
        async fn translate(&self, text: &str) -> Result<String> {
            if self.fail {
                bail!("stub translator set to fail");
            }
            match self.translations.get(text) {
                Some(translated) => Ok(translated.clone()),
                None => bail!("no stub translation for input"),
            }
        }
    }
}

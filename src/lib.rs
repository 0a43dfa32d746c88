pub mod analysis;
pub mod io;
pub mod models;
pub mod server;
pub mod store;
pub mod transcribe;
pub mod translate;

pub use analysis::{analyze, translate_segments};
pub use io::{parse_segments_file, parse_segments_json};
pub use models::{AnalysisReport, Transcript, TranscriptSegment, WhisperResponse};
pub use server::{AppState, serve};
pub use store::{MemoryStore, ResultStore};
pub use transcribe::{GroqClient, GroqConfig, TranscribeError, extract_audio};
pub use translate::{
    DisabledTranslator, GoogleTranslator, TranslateConfig, Translator, polarity,
};

pub mod error;
pub mod pool;
pub mod session;
pub mod store;
pub mod user;
pub mod word;

pub use error::{StoreError, VocabError};
pub use pool::{CategoryGroup, GlobalPool, GlobalRecord};
pub use session::{PracticeOutcome, PracticeRound, Prompt, VocabularySession};
pub use store::Store;
pub use user::UserVocabulary;
pub use word::Word;

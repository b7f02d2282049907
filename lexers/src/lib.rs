mod scanner;
mod helpers;
mod space_tokenizer;

pub use scanner::Scanner;
pub use space_tokenizer::{SpaceTokenizer, Spacing};

pub use helpers::is_number;
pub use helpers::scan_number;

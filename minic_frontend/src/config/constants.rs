pub mod compile_time {
    pub mod file_processing {
        /// Maximum file size allowed for processing (10MB)
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
    }

    pub mod lexical {
        /// Initial capacity reserved for the token vector
        pub const INITIAL_TOKEN_CAPACITY: usize = 256;

        /// Source length above which a warning is logged before scanning.
        /// Scanning still proceeds; the tokenizer itself never fails.
        pub const LARGE_SOURCE_WARN_THRESHOLD: usize = 512 * 1024;
    }

    pub mod syntax {
        /// Initial capacity reserved for the derivation step list
        pub const INITIAL_STEP_CAPACITY: usize = 64;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn constants_are_sane() {
        assert!(file_processing::LARGE_FILE_THRESHOLD < file_processing::MAX_FILE_SIZE);
        assert!(lexical::INITIAL_TOKEN_CAPACITY > 0);
        assert!(syntax::INITIAL_STEP_CAPACITY > 0);
    }
}

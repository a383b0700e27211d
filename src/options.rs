use crate::{
    consts::consts::UNSPECIFIED_PHONE_LABEL,
    persistence::{codec::CodecKind, store::MissingFile},
    renderer::renderer::PhoneLabels,
};

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub codec: CodecKind,
    pub unspecified_label: String,
    pub echo_prompts: bool,
    pub missing_file: MissingFile,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl AppOptions {
    /// Encoding used for both reading and writing the address book file
    pub fn set_codec(mut self, codec: CodecKind) -> Self {
        self.codec = codec;
        self
    }

    /// Label shown for phone numbers entered with an unknown type
    pub fn set_unspecified_label(mut self, label: String) -> Self {
        self.unspecified_label = label;
        self
    }

    /// When off, the builder reads answers without writing any prompts
    pub fn set_echo_prompts(mut self, echo_prompts: bool) -> Self {
        self.echo_prompts = echo_prompts;
        self
    }

    pub fn set_missing_file(mut self, missing_file: MissingFile) -> Self {
        self.missing_file = missing_file;
        self
    }

    pub fn phone_labels(&self) -> PhoneLabels {
        PhoneLabels::default().set_unspecified_label(self.unspecified_label.clone())
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            codec: CodecKind::default(),
            unspecified_label: UNSPECIFIED_PHONE_LABEL.to_string(),
            echo_prompts: true,
            missing_file: MissingFile::CreateNew,
        }
    }
}

#[cfg(test)]
impl AppOptions {
    pub fn new_test() -> Self {
        AppOptions::default()
            .set_codec(CodecKind::Json)
            .set_echo_prompts(false)
    }
}

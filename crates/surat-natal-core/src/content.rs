//! Static festive text and theme of the card.

/// Longest sender name kept in an export file name, in bytes. Leaves room
/// for the label, a ` (n)` suffix and the extension under the usual
/// 255-byte file name limit.
pub const MAX_FILE_NAME_SENDER_BYTES: usize = 200;

/// Everything on the card that does not come from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    /// Prefix of exported file names
    pub app_label: String,
    /// Window and page title
    pub page_title: String,
    pub heading: String,
    pub salutation: String,
    /// Small tag shown on the photo corner
    pub year_tag: String,
    pub greeting: String,
    pub highlight: String,
    pub scripture_reference: String,
    pub scripture_quote: String,
    pub blessing: String,
    pub signature_prefix: String,
    pub share_title: String,
    /// Share message; `{name}` is replaced with the sender name
    pub share_text_template: String,
    /// Shown after the link is copied to the clipboard
    pub copied_notice: String,
    /// Theme background, also used as the rasterizer backdrop
    pub background: Rgb,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            app_label: "Natal".to_string(),
            page_title: "Surat Natal".to_string(),
            heading: "Merry Christmas".to_string(),
            salutation: "Halo Semuanya,".to_string(),
            year_tag: "2025".to_string(),
            greeting: "Selamat Hari Natal untuk kita semua.".to_string(),
            highlight: "Semoga terang natal menyelimuti hati kita dan menjadi terang bagi keluarga serta sesama".to_string(),
            scripture_reference: "Roma 15 : 13".to_string(),
            scripture_quote: "\u{201c}Semoga Allah, sumber pengharapan, memenuhi kamu dengan segala sukacita dan damai sejahtera dalam iman.\u{201d}".to_string(),
            blessing: "GOD BLESS US".to_string(),
            signature_prefix: "Salam Hangat,".to_string(),
            share_title: "Surat Natal Keluarga".to_string(),
            share_text_template: "Hai! Lihat surat Natal indah dari {name}.".to_string(),
            copied_notice: "Link berhasil disalin ke clipboard!".to_string(),
            background: Rgb::new(0x05, 0x0a, 0x14),
        }
    }
}

impl CardContent {
    /// Replace the year tag (e.g. with the current year).
    pub fn with_year(mut self, year: impl std::fmt::Display) -> Self {
        self.year_tag = year.to_string();
        self
    }

    /// Share message for the given sender.
    pub fn share_text(&self, sender_name: &str) -> String {
        self.share_text_template.replace("{name}", sender_name)
    }

    /// `<AppLabel>-<senderName>.png`, with characters that cannot appear in
    /// a file name replaced by `_` and the name cut to
    /// [`MAX_FILE_NAME_SENDER_BYTES`].
    pub fn export_file_name(&self, sender_name: &str) -> String {
        let mut safe: String = sender_name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        if safe.len() > MAX_FILE_NAME_SENDER_BYTES {
            let mut cut = MAX_FILE_NAME_SENDER_BYTES;
            while !safe.is_char_boundary(cut) {
                cut -= 1;
            }
            safe.truncate(cut);
            safe.truncate(safe.trim_end().len());
        }
        format!("{}-{}.png", self.app_label, safe)
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let content = CardContent::default();
        assert_eq!(content.export_file_name("Budi"), "Natal-Budi.png");
        assert_eq!(content.export_file_name("  Budi  "), "Natal-Budi.png");
        assert_eq!(content.export_file_name("Ibu & Bapak"), "Natal-Ibu & Bapak.png");
    }

    #[test]
    fn test_export_file_name_replaces_path_characters() {
        let content = CardContent::default();
        assert_eq!(content.export_file_name("a/b\\c:d"), "Natal-a_b_c_d.png");
        assert_eq!(content.export_file_name("x\ny"), "Natal-x_y.png");
    }

    #[test]
    fn test_export_file_name_caps_long_names() {
        let content = CardContent::default();

        let long = "Keluarga Besar ".repeat(20);
        let name = content.export_file_name(&long);
        assert!(name.len() <= "Natal-".len() + MAX_FILE_NAME_SENDER_BYTES + ".png".len());
        assert!(name.starts_with("Natal-Keluarga Besar"));
        assert!(!name.contains(" .png"));

        // Multi-byte characters are never split
        let wide = "é".repeat(150);
        let name = content.export_file_name(&wide);
        let kept = name.trim_start_matches("Natal-").trim_end_matches(".png");
        assert_eq!(kept, "é".repeat(MAX_FILE_NAME_SENDER_BYTES / 2));
    }

    #[test]
    fn test_share_text_embeds_name() {
        let content = CardContent::default();
        assert_eq!(
            content.share_text("Budi"),
            "Hai! Lihat surat Natal indah dari Budi."
        );
    }

    #[test]
    fn test_background_hex() {
        assert_eq!(CardContent::default().background.to_hex(), "#050a14");
        assert_eq!(CardContent::default().with_year(2026).year_tag, "2026");
    }
}

use crate::config;

pub fn href(subject: &str) -> String {
    href_to(config::CONTACT_EMAIL, subject)
}

pub fn href_to(address: &str, subject: &str) -> String {
    if subject.is_empty() {
        return format!("mailto:{}", address);
    }
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_percent_encoded() {
        assert_eq!(
            href("Kinetic Clips [SCALE]"),
            "mailto:hello@kineticclips.com?subject=Kinetic%20Clips%20%5BSCALE%5D"
        );
    }

    #[test]
    fn bare_address_without_subject() {
        assert_eq!(href_to("a@b.co", ""), "mailto:a@b.co");
    }
}

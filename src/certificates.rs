#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "1",
        title: "Front End Development - HTML",
        issuer: "Issued by: GreatLearning • April 2024",
        description: "HTML, CSS, and JavaScript fundamentals for building responsive websites.",
        image: "as/Front End Development - HTML.png",
    },
    Certificate {
        id: "2",
        title: "Advanced Cyber Security - Threats and Governance",
        issuer: "Issued by: GreatLearning • February 2022",
        description: "Comprehensive training in cyber security threats, risk management, and governance frameworks.",
        image: "as/Advanced Cyber Security - Threats and Governance.png",
    },
    Certificate {
        id: "3",
        title: "Machine Learning",
        issuer: "Issued by: GreatLearning • April 2024",
        description: "Fundamentals of machine learning, including supervised and unsupervised learning algorithms.",
        image: "as/Machine Learning .png",
    },
];

/// Cards rendered in the certificates grid; `id` is the `data-certificate`
/// value resolved through [`lookup`].
pub const CERTIFICATE_CARDS: &[(&str, &str)] = &[
    ("1", "Front End Development - HTML"),
    ("2", "Advanced Cyber Security"),
    ("3", "Machine Learning"),
];

pub fn lookup(id: &str) -> Result<&'static Certificate, String> {
    CERTIFICATES
        .iter()
        .find(|certificate| certificate.id == id.trim())
        .ok_or_else(|| format!("Certificate {id} not found"))
}

/// What the certificate dialog shows. A failed lookup keeps the previous
/// certificate on screen and only raises the notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertificateView {
    pub shown: Option<&'static Certificate>,
    pub notice: Option<String>,
}

impl CertificateView {
    pub fn select(&mut self, id: &str) {
        match lookup(id) {
            Ok(certificate) => {
                self.shown = Some(certificate);
                self.notice = None;
            }
            Err(message) => {
                tracing::warn!("certificates: {message}");
                self.notice = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_identifier_resolves_issuer() {
        assert_eq!(
            lookup("2").map(|certificate| certificate.issuer),
            Ok("Issued by: GreatLearning • February 2022")
        );
    }

    #[test]
    fn unknown_identifier_keeps_previous_content() {
        let mut view = CertificateView::default();
        view.select("1");
        let before = view.shown;
        view.select("99");
        assert_eq!(view.shown, before);
        assert_eq!(view.notice.as_deref(), Some("Certificate 99 not found"));
    }

    #[test]
    fn successful_lookup_clears_notice() {
        let mut view = CertificateView::default();
        view.select("99");
        view.select("3");
        assert_eq!(view.notice, None);
        assert_eq!(view.shown.map(|certificate| certificate.title), Some("Machine Learning"));
    }
}

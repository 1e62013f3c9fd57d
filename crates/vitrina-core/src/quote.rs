//! Quote request message construction.
//!
//! A submitted quote form becomes a pre-filled WhatsApp deep link. There is
//! no server round-trip; the whole bridge is URL construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Named fields of the quote form.
///
/// Missing optional fields stay empty and interpolate as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    pub nombre: String,
    pub servicio: String,
    pub ancho: String,
    pub alto: String,
    pub material: String,
    pub ubicacion: String,
    pub descripcion: String,
    pub telefono: String,
}

impl QuoteRequest {
    /// Interpolate the fields into the fixed outbound message template.
    pub fn build_message(&self) -> String {
        format!(
            "Hola, soy {}. Quiero cotizar: {}. Medidas: {}cm x {}cm. Material: {}. Ubicación: {}. Detalles: {}. Tel: {}",
            self.nombre,
            self.servicio,
            self.ancho,
            self.alto,
            self.material,
            self.ubicacion,
            self.descripcion,
            self.telefono,
        )
    }
}

/// Build the `wa.me` deep link for a message.
///
/// `phone_e164` is the E.164 number without separators; the message is
/// percent-encoded with the `encodeURIComponent` character set.
pub fn whatsapp_url(phone_e164: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone_e164}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message() {
        let request = QuoteRequest {
            nombre: "Ana".into(),
            servicio: "Reja".into(),
            ancho: "120".into(),
            alto: "200".into(),
            material: "Hierro".into(),
            ubicacion: "Shushufindi".into(),
            descripcion: "Con candado".into(),
            telefono: "0999999999".into(),
        };

        assert_eq!(
            request.build_message(),
            "Hola, soy Ana. Quiero cotizar: Reja. Medidas: 120cm x 200cm. \
             Material: Hierro. Ubicación: Shushufindi. Detalles: Con candado. \
             Tel: 0999999999"
        );
    }

    #[test]
    fn test_missing_fields_collapse_to_empty() {
        let request = QuoteRequest {
            nombre: "Ana".into(),
            servicio: "Reja".into(),
            ..QuoteRequest::default()
        };

        assert_eq!(
            request.build_message(),
            "Hola, soy Ana. Quiero cotizar: Reja. Medidas: cm x cm. \
             Material: . Ubicación: . Detalles: . Tel: "
        );
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url("593999999999", "Hola, soy Ana");
        assert_eq!(url, "https://wa.me/593999999999?text=Hola%2C%20soy%20Ana");
    }

    #[test]
    fn test_whatsapp_url_encodes_utf8() {
        let url = whatsapp_url("593999999999", "Ubicación: aquí");
        assert!(url.contains("Ubicaci%C3%B3n"));
        assert!(url.contains("aqu%C3%AD"));
    }

    #[test]
    fn test_uri_component_keeps_unreserved_marks() {
        let url = whatsapp_url("1", "a-b_c.d!e~f*g'h(i)j");
        assert!(url.ends_with("?text=a-b_c.d!e~f*g'h(i)j"));
    }
}

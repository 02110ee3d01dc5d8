//! Real-world application cards shown alongside the calculator.

use serde::Serialize;

use crate::explain::{explain_or_fallback, Explanation, ExplanationService};

/// Illustration used for an application card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Ladder leaning against a wall.
    Ladder,
    /// Phone screen and its diagonal.
    Phone,
    /// Room corner checked with the 3-4-5 rule.
    Carpet,
    /// Route across a map.
    Map,
    /// Satellites and a ground station.
    Cosmos,
    /// Pixel grid.
    Grid,
    /// Irrigated field crossed by a pipe.
    Field,
    /// Lighthouse above the horizon.
    Lighthouse,
    /// Catapult launch vector.
    Catapult,
    /// 3D printer head.
    Printer,
}

/// One application card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Application {
    /// Stable identifier.
    pub id: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// One-line teaser.
    pub short_desc: &'static str,
    /// Problem statement.
    pub problem: &'static str,
    /// How the theorem solves the problem.
    pub solution: &'static str,
    /// Formula shown on the card.
    pub formula: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
    /// Illustration to pair with the card.
    pub shape_type: ShapeType,
}

impl Application {
    /// Ask `service` how the theorem applies to this card.
    ///
    /// The title is sent as the topic and the problem text as the question. Any
    /// service failure yields [`Explanation::fallback`].
    #[must_use]
    pub fn explain_with<S>(&self, service: &S) -> Explanation
    where
        S: ExplanationService + ?Sized,
    {
        explain_or_fallback(service, self.title, self.problem)
    }
}

/// All application cards in display order.
pub static APPLICATIONS: [Application; 10] = [
    Application {
        id: "ladder",
        title: "Narvon Balandligi",
        short_desc: "Devorga suyalgan narvonning uzunligini topish.",
        problem: "Sizda 5 metr balandlikdagi devorga chiqish kerak. Narvon devor ostidan 2 metr uzoqlikda turibdi. Necha metrlik narvon kerak?",
        solution: "Narvon (gipotenuza), devor (katet) va yer (katet) to'g'ri burchakli uchburchak hosil qiladi.",
        formula: "c = √(a² + b²)",
        icon: "🪜",
        shape_type: ShapeType::Ladder,
    },
    Application {
        id: "phone",
        title: "Telefon Ekrani",
        short_desc: "Ekran diagonali dyuymlarda qanday o'lchanadi?",
        problem: "Telefonning bo'yi 12 sm, eni 7 sm. Uning diagonali necha sm?",
        solution: "Ekran to'g'ri to'rtburchak bo'lib, diagonali uni ikkita to'g'ri burchakli uchburchakka ajratadi.",
        formula: "d² = w² + h²",
        icon: "📱",
        shape_type: ShapeType::Phone,
    },
    Application {
        id: "carpet",
        title: "Gilam To'g'ri Burchagi",
        short_desc: "Xona burchagi 90 darajami?",
        problem: "Ustalar xonaning burchagi to'g'ri ekanligini tekshirmoqchi. Ular 3m va 4m o'lchab, diagonalni tekshirishadi.",
        solution: "Agar tomonlar 3 va 4 bo'lsa, diagonal 5 bo'lishi kerak (3-4-5 qoidasi).",
        formula: "a² + b² = c² (3² + 4² = 5²)",
        icon: "📐",
        shape_type: ShapeType::Carpet,
    },
    Application {
        id: "distance",
        title: "Ikki Nuqta Oralig'i",
        short_desc: "Xaritadagi eng qisqa masofa.",
        problem: "A nuqtadan B nuqtaga borish uchun avval 3 km shimolga, keyin 4 km sharqqa yurildi. To'g'ri chiziq bo'yicha masofa qancha?",
        solution: "Yurilgan yo'llar katetlar, to'g'ri masofa esa gipotenuzadir.",
        formula: "S = √(x² + y²)",
        icon: "🗺️",
        shape_type: ShapeType::Map,
    },
    Application {
        id: "astronomy",
        title: "Astronomik Masofa",
        short_desc: "Yulduzlargacha bo'lgan masofa.",
        problem: "Yerdan turib kosmik kema va sun'iy yo'ldosh orasidagi masofani aniqlash.",
        solution: "Signalning borish va kelish vaqti hamda burchaklar orqali uchburchak hosil qilinadi.",
        formula: "c² = a² + b²",
        icon: "🔭",
        shape_type: ShapeType::Cosmos,
    },
    Application {
        id: "pixels",
        title: "Kompyuter Grafikasi",
        short_desc: "Piksellar orasidagi masofa.",
        problem: "Ekranda (10, 20) va (40, 60) koordinatali piksellar orasidagi masofani hisoblash.",
        solution: "Koordinatalar farqi katetlarni beradi: dx = x2-x1, dy = y2-y1.",
        formula: "d = √((x₂-x₁)² + (y₂-y₁)²)",
        icon: "💻",
        shape_type: ShapeType::Grid,
    },
    Application {
        id: "field",
        title: "Sug'orish Maydoni",
        short_desc: "Dalani diagonal bo'yicha bo'lish.",
        problem: "Katta to'rtburchak maydonga suv quvuri o'tkazish kerak. Diagonal bo'ylab eng qisqa yo'l qancha?",
        solution: "Maydonning eni va bo'yi katetlar, quvur esa gipotenuza bo'ladi.",
        formula: "L² = a² + b²",
        icon: "🌾",
        shape_type: ShapeType::Field,
    },
    Application {
        id: "height",
        title: "Sfera Balandligi",
        short_desc: "Ufqgacha bo'lgan masofa.",
        problem: "Dengizdagi kemadan mayoqqacha bo'lgan masofani aniqlash orqali mayoq balandligini topish.",
        solution: "Yer radiusi va ufqqa urinma chiziq to'g'ri burchak hosil qiladi.",
        formula: "R² + d² = (R+h)²",
        icon: "🗼",
        shape_type: ShapeType::Lighthouse,
    },
    Application {
        id: "catapult",
        title: "Katapulta Traektoriyasi",
        short_desc: "Otish masofasi va tezligi.",
        problem: "Katapulta toshni qanchalik uzoqqa otishini hisoblashda boshlang'ich tezlik vektorini topish.",
        solution: "Tezlik vektori gorizontal va vertikal tashkil etuvchilarga (katetlarga) ajratiladi.",
        formula: "v² = vx² + vy²",
        icon: "🏰",
        shape_type: ShapeType::Catapult,
    },
    Application {
        id: "3dprint",
        title: "3D Bosib Chiqarish",
        short_desc: "Boshchaning harakati.",
        problem: "3D printer boshi bir nuqtadan ikkinchi nuqtaga (X, Y, Z fazoda) harakatlanmoqda.",
        solution: "Fazoviy Pifagor teoremasi: 3 ta o'lcham bo'yicha masofa hisoblanadi.",
        formula: "d² = x² + y² + z²",
        icon: "🖨️",
        shape_type: ShapeType::Printer,
    },
];

/// All application cards in display order.
#[must_use]
pub fn applications() -> &'static [Application] {
    &APPLICATIONS
}

/// Look up a card by its identifier.
///
/// # Examples
/// ```
/// use pythagorx::{find_application, ShapeType};
///
/// let card = find_application("3dprint").expect("card exists");
/// assert_eq!(card.shape_type, ShapeType::Printer);
/// assert!(find_application("unknown").is_none());
/// ```
#[must_use]
pub fn find_application(id: &str) -> Option<&'static Application> {
    APPLICATIONS.iter().find(|item| item.id == id)
}

/// Serialize the whole catalog as pretty-printed JSON.
///
/// # Errors
///
/// Propagates any [`serde_json::Error`] raised while serializing.
pub fn catalog_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(applications())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExplanationError;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Service that records what it was asked and replies with a fixed result.
    struct Canned {
        /// Reply handed back for every request.
        reply: Result<Explanation, ExplanationError>,
        /// Topic and question of each request.
        asked: RefCell<Vec<(String, String)>>,
    }

    impl ExplanationService for Canned {
        fn explain(&self, topic: &str, question: &str) -> Result<Explanation, ExplanationError> {
            self.asked
                .borrow_mut()
                .push((topic.to_string(), question.to_string()));
            self.reply.clone()
        }
    }

    #[test]
    fn catalog_has_ten_unique_cards() {
        let items = applications();
        assert_eq!(items.len(), 10);
        let ids: HashSet<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 10);
        let shapes: HashSet<_> = items.iter().map(|item| item.shape_type).collect();
        assert_eq!(shapes.len(), 10);
    }

    #[test]
    fn card_sends_title_and_problem_to_the_service() {
        let answer = Explanation::from_reply(
            Some("Narvon gipotenuzadir.".to_string()),
            ["https://a.example", "https://a.example"].map(String::from),
        );
        let service = Canned {
            reply: Ok(answer.clone()),
            asked: RefCell::new(Vec::new()),
        };
        let card = find_application("ladder").expect("ladder card exists");

        assert_eq!(card.explain_with(&service), answer);
        let asked = service.asked.borrow();
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].0, card.title);
        assert_eq!(asked[0].1, card.problem);
    }

    #[test]
    fn card_explanation_falls_back_on_failure() {
        let service = Canned {
            reply: Err(ExplanationError::Request("unreachable".to_string())),
            asked: RefCell::new(Vec::new()),
        };
        let card = find_application("3dprint").expect("printer card exists");
        assert_eq!(card.explain_with(&service), Explanation::fallback());
    }

    #[test]
    fn json_uses_lowercase_shape_names() {
        let json = catalog_json().expect("catalog serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["id"], "ladder");
        assert_eq!(value[9]["shape_type"], "printer");
    }
}

//! Built-in navigation destinations.
//!
//! These always take part in matching as if they were one more collection,
//! so "home" finds the landing page even before any store has loaded. They
//! match on title and description only; their shared category is a grouping
//! label.

/// Category shared by all built-in destinations.
pub const NAVIGATION_CATEGORY: &str = "Navegação";

/// A fixed portal destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

const DESTINATIONS: &[Destination] = &[
    Destination {
        id: "home",
        title: "Página Inicial",
        description: "Home do portal da prefeitura",
        route: "/",
    },
    Destination {
        id: "news",
        title: "Notícias",
        description: "Últimas notícias do município",
        route: "/noticias",
    },
    Destination {
        id: "agenda",
        title: "Agenda",
        description: "Eventos e compromissos oficiais",
        route: "/agenda",
    },
    Destination {
        id: "gallery",
        title: "Galeria",
        description: "Álbuns de fotos da cidade",
        route: "/galeria",
    },
    Destination {
        id: "services",
        title: "Serviços",
        description: "Serviços oferecidos ao cidadão",
        route: "/servicos",
    },
    Destination {
        id: "history",
        title: "História",
        description: "História do município",
        route: "/historia",
    },
    Destination {
        id: "mayor",
        title: "Prefeito",
        description: "Conheça o prefeito e o vice-prefeito",
        route: "/prefeito",
    },
    Destination {
        id: "secretariats",
        title: "Secretarias",
        description: "Secretarias municipais e seus serviços",
        route: "/secretarias",
    },
    Destination {
        id: "organogram",
        title: "Organograma",
        description: "Estrutura administrativa da prefeitura",
        route: "/organograma",
    },
    Destination {
        id: "symbols",
        title: "Símbolos Municipais",
        description: "Brasão e bandeira do município",
        route: "/simbolos",
    },
    Destination {
        id: "anthem",
        title: "Hino Municipal",
        description: "Letra e áudio do hino oficial",
        route: "/hino",
    },
    Destination {
        id: "general-data",
        title: "Dados Gerais",
        description: "População, área e indicadores do município",
        route: "/dados-gerais",
    },
    Destination {
        id: "tourist-attractions",
        title: "Pontos Turísticos",
        description: "Atrações turísticas da cidade",
        route: "/pontos-turisticos",
    },
];

/// All built-in destinations, in declaration order.
pub fn destinations() -> &'static [Destination] {
    DESTINATIONS
}

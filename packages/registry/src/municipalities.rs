//! The 78 municipalities of Espírito Santo.
//!
//! Names are in registry form: uppercase, diacritics stripped, single
//! spaces. See [`crate::normalize::normalize_name`].

/// Registry names of every Espírito Santo municipality.
pub const ES_MUNICIPALITIES: &[&str] = &[
    "AFONSO CLAUDIO",
    "AGUA DOCE DO NORTE",
    "AGUIA BRANCA",
    "ALEGRE",
    "ALFREDO CHAVES",
    "ALTO RIO NOVO",
    "ANCHIETA",
    "APIACA",
    "ARACRUZ",
    "ATILIO VIVACQUA",
    "BAIXO GUANDU",
    "BARRA DE SAO FRANCISCO",
    "BOA ESPERANCA",
    "BOM JESUS DO NORTE",
    "BREJETUBA",
    "CACHOEIRO DE ITAPEMIRIM",
    "CARIACICA",
    "CASTELO",
    "COLATINA",
    "CONCEICAO DA BARRA",
    "CONCEICAO DO CASTELO",
    "DIVINO DE SAO LOURENCO",
    "DOMINGOS MARTINS",
    "DORES DO RIO PRETO",
    "ECOPORANGA",
    "FUNDAO",
    "GOVERNADOR LINDENBERG",
    "GUACUI",
    "GUARAPARI",
    "IBATIBA",
    "IBIRACU",
    "IBITIRAMA",
    "ICONHA",
    "IRUPI",
    "ITAGUACU",
    "ITAPEMIRIM",
    "ITARANA",
    "IUNA",
    "JAGUARE",
    "JERONIMO MONTEIRO",
    "JOAO NEIVA",
    "LARANJA DA TERRA",
    "LINHARES",
    "MANTENOPOLIS",
    "MARATAIZES",
    "MARECHAL FLORIANO",
    "MARILANDIA",
    "MIMOSO DO SUL",
    "MONTANHA",
    "MUCURICI",
    "MUNIZ FREIRE",
    "MUQUI",
    "NOVA VENECIA",
    "PANCAS",
    "PEDRO CANARIO",
    "PINHEIROS",
    "PIUMA",
    "PONTO BELO",
    "PRESIDENTE KENNEDY",
    "RIO BANANAL",
    "RIO NOVO DO SUL",
    "SANTA LEOPOLDINA",
    "SANTA MARIA DE JETIBA",
    "SANTA TERESA",
    "SAO DOMINGOS DO NORTE",
    "SAO GABRIEL DA PALHA",
    "SAO JOSE DO CALCADO",
    "SAO MATEUS",
    "SAO ROQUE DO CANAA",
    "SERRA",
    "SOORETAMA",
    "VARGEM ALTA",
    "VENDA NOVA DO IMIGRANTE",
    "VIANA",
    "VILA PAVAO",
    "VILA VALERIO",
    "VILA VELHA",
    "VITORIA",
];

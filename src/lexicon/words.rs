//! Word tables for Brazilian Portuguese.
//!
//! Tables are listed in lookup precedence order: a word present in two
//! tables takes the category of the first one.

use super::Category;

pub(super) const ARTICLES: &[&str] = &["o", "a", "os", "as", "um", "uma", "uns", "umas"];

pub(super) const PRONOUNS: &[&str] = &[
    // personal
    "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "você", "vocês",
    // demonstrative
    "este", "esta", "estes", "estas", "esse", "essa", "esses", "essas", "aquele", "aquela",
    "aqueles", "aquelas", "isto", "isso", "aquilo",
    // possessive
    "meu", "minha", "meus", "minhas", "teu", "tua", "teus", "tuas", "seu", "sua", "seus",
    "suas", "nosso", "nossa", "nossos", "nossas",
];

pub(super) const NOUNS: &[&str] = &[
    // people
    "gato", "cachorro", "homem", "mulher", "menino", "menina", "professor", "professora",
    "aluno", "alunos", "estudante", "estudantes", "maria", "joão", "pedro", "ana", "diretor",
    "diretora",
    // things and ideas
    "casa", "carro", "livro", "computador", "matemática", "física", "peixe", "comida",
    "matéria", "aula", "escola", "universidade", "faculdade", "curso", "prova", "trabalho",
    "exercício", "projeto", "apresentação", "automato", "autômato", "sintaxe", "gramática",
    "linguagem", "programação", "código", "algoritmo", "estrutura", "validador",
];

pub(super) const VERBS: &[&str] = &[
    // copulas
    "sou", "é", "somos", "são", "era", "eras", "éramos", "eram", "foi", "fomos", "foram",
    "será", "seremos", "serão", "seria", "seriam", "estou", "está", "estamos", "estão",
    "estava", "estávamos", "estavam", "estive", "esteve", "estivemos", "estiveram", "ficar",
    "fica", "ficam", "ficou", "ficaram", "parecer", "parece", "parecem", "pareceu",
    "permanecer", "permanece", "permanecem", "permaneceu", "continuar", "continua",
    "continuam",
    // present
    "come", "corre", "pula", "dorme", "estuda", "lê", "escreve", "fala", "compra", "vende",
    "ama", "odeia", "ensina", "aprende", "programa", "desenvolve", "cria", "implementa",
    "valida", "analisa", "explica", "caminha", "liga",
    // past
    "comeu", "correu", "pulou", "dormiu", "estudou", "leu", "escreveu", "falou", "comprou",
    "vendeu", "amou", "odiou", "ensinou", "aprendeu", "programou", "desenvolveu", "criou",
    "implementou", "validou", "analisou", "explicou", "caminhou", "liguei", "ligou",
    "ligaram",
    // infinitive
    "comer", "correr", "pular", "dormir", "estudar", "ler", "escrever", "falar", "comprar",
    "vender", "amar", "odiar", "ensinar", "aprender", "programar", "desenvolver", "criar",
    "implementar", "validar", "analisar", "explicar", "caminhar", "ser", "estar", "andar",
    "viver", "ligar",
];

pub(super) const ADJECTIVES: &[&str] = &[
    "bonito", "bonita", "grande", "pequeno", "pequena", "alto", "alta", "baixo", "baixa",
    "inteligente", "esperto", "esperta", "rápido", "rápida", "lento", "lenta", "difícil",
    "fácil", "complexo", "complexa", "simples", "interessante", "chato", "chata",
    "importante", "útil", "inútil", "necessário", "necessária", "eficiente", "feliz",
    "triste", "alegre", "contente", "satisfeito", "satisfeita", "animado", "animada",
    "cansado", "cansada", "preocupado", "preocupada", "ocupado", "ocupada", "livre", "bom",
    "boa", "mau", "má", "melhor", "pior", "ótimo", "ótima", "péssimo", "péssima", "novo",
    "nova", "velho", "velha", "jovem", "antigo", "antiga", "moderno", "moderna", "legal",
    "bacana", "maneiro", "maneira", "divertido", "divertida", "chique",
];

pub(super) const PREPOSITIONS: &[&str] = &[
    "de", "para", "com", "sem", "em", "sobre", "sob", "entre", "até", "por", "ao", "aos", "à",
    "às", "do", "dos", "da", "das", "no", "nos", "na", "nas",
];

pub(super) const PUNCTUATION: &[&str] = &[".", "!", "?", ",", ";", ":"];

pub(super) const CONJUNCTIONS: &[&str] = &[
    "e", "ou", "mas", "porém", "contudo", "todavia", "porque", "pois", "que", "se",
];

pub(super) const ADVERBS: &[&str] = &[
    "hoje", "ontem", "amanhã", "agora", "depois", "antes", "sempre", "nunca", "rapidamente",
    "lentamente", "bem", "mal", "muito", "pouco", "bastante", "demais", "aqui", "ali", "lá",
    "acolá", "longe", "perto", "dentro", "fora", "ainda",
];

/// Copula forms. A verb in this set makes a following adjective a predicate
/// complement.
pub(super) const LINKING_VERBS: &[&str] = &[
    "sou", "é", "somos", "são", "era", "eras", "éramos", "eram", "foi", "fomos", "foram",
    "será", "seremos", "serão", "seria", "seriam", "estou", "está", "estamos", "estão",
    "estava", "estávamos", "estavam", "estive", "esteve", "estivemos", "estiveram", "ficar",
    "fica", "ficam", "ficou", "ficaram", "parecer", "parece", "parecem", "pareceu",
    "permanecer", "permanece", "permanecem", "permaneceu", "continuar", "continua",
    "continuam", "andar", "anda", "andam", "andou", "andaram", "viver", "vive", "vivem",
    "viveu", "viveram",
];

/// Tables in precedence order.
pub(super) const TABLES: &[(Category, &[&str])] = &[
    (Category::Article, ARTICLES),
    (Category::Pronoun, PRONOUNS),
    (Category::Noun, NOUNS),
    (Category::Verb, VERBS),
    (Category::Adjective, ADJECTIVES),
    (Category::Preposition, PREPOSITIONS),
    (Category::Punctuation, PUNCTUATION),
    (Category::Conjunction, CONJUNCTIONS),
    (Category::Adverb, ADVERBS),
];

/// Contractions classified as prepositions before any table lookup.
pub(super) const PREPOSITION_OVERRIDES: &[&str] = &["ao", "aos"];

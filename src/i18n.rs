// Localization - string tables for every user-facing label
//
// Two locales ship with the app: English and Brazilian Portuguese.
// Lookups are static; switching locale at runtime just swaps the table.

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Parse a language tag from config or CLI ("en", "pt-BR", "pt_br", "pt")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "pt" | "pt-br" => Some(Self::PtBr),
            _ => None,
        }
    }

    /// Language tag for config serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }

    /// Short label for the title bar
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::PtBr => "PT",
        }
    }

    /// The other locale (the header toggle only ever has two)
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::PtBr,
            Self::PtBr => Self::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::PtBr => &PT_BR,
        }
    }
}

/// Every translatable label used by the status page
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_placeholder: &'static str,
    pub search: &'static str,
    pub loading: &'static str,
    pub retry: &'static str,
    pub server_status: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub success: &'static str,
    pub not_online: &'static str,
    pub username_required: &'static str,
    pub generic_error: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
}

static EN: Strings = Strings {
    title: "Server Status",
    subtitle: "Check whether a Mineflared server is reachable right now",
    input_placeholder: "Enter a username",
    search: "Search",
    loading: "Checking server status...",
    retry: "Retry",
    server_status: "Server status",
    online: "Online",
    offline: "Offline",
    success: "The server is online!",
    not_online: "The server is not online",
    username_required: "A username is required to check the server status",
    generic_error: "Could not check the server status",
    copied: "✓ Copied to clipboard",
    copy_failed: "✗ Failed to copy",
};

static PT_BR: Strings = Strings {
    title: "Status do Servidor",
    subtitle: "Verifique se um servidor Mineflared está acessível agora",
    input_placeholder: "Digite um nome de usuário",
    search: "Buscar",
    loading: "Verificando status do servidor...",
    retry: "Tentar novamente",
    server_status: "Status do servidor",
    online: "Online",
    offline: "Offline",
    success: "O servidor está online!",
    not_online: "O servidor não está online",
    username_required: "É necessário um nome de usuário para verificar o status",
    generic_error: "Não foi possível verificar o status do servidor",
    copied: "✓ Copiado para a área de transferência",
    copy_failed: "✗ Falha ao copiar",
};

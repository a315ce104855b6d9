//! Ordered, read-only table of known peer repositories.

use crate::core::types::RegistryEntry;

/// Built-in registry: `(owner, group, url)`.
const EMBEDDED: &[(&str, &str, &str)] = &[
    ("Дарья Озерова", "321", "https://github.com/OzerovaDaria/pythonprac"),
    ("Павел Шибаев", "321", "https://git.cs.msu.ru/s02190248/pythonprac"),
    ("Вениамин Арефьев", "321", "https://github.com/Veniamin-Arefev/pythonprac-2021"),
    ("Иван Ушаков", "321", "https://git.cs.msu.ru/s02190226/pythonprac"),
    ("Дмитрий Хасанов", "321", "https://git.cs.msu.ru/s02190234/pythonprac2021"),
    ("Илья Савицкий", "321", "https://github.com/ipsavitsky/pythonprac"),
    ("Александр Колесников", "321", "https://git.cs.msu.ru/s02190290/python-prac-2021"),
    ("Александр Фролов", "321", "https://github.com/sanyavertolet/pythonprac"),
    ("Егор Князев", "321", "https://github.com/KH9IZ/PythonPrac"),
    ("Ривзан Зайдуллин", "321", "https://git.cs.msu.ru/s02190101/pythonprac-2021"),
    ("Юрий Лебединский", "321", "https://git.cs.msu.ru/s02190141/pythonprac-2021"),
    ("Илья Федоренко", "321", "https://github.com/FluFFka/python-prac"),
    ("Дмитрий Стамплевский", "321", "https://github.com/stamplevskiyd/pythonprac-2021"),
    ("Геннадий Шутков", "321", "https://github.com/gen-gematogen/pythonprac"),
    ("Максим Порывай", "321", "https://git.cs.msu.ru/s90190054/pythonprac-2021"),
    ("Арий Оконишников", "321", "https://github.com/Uberariy/pythonprac"),
    ("Юлия Задорожная", "321", "https://git.cs.msu.ru/s02190029/prakpython"),
    ("Владислав Рубцов", "321", "https://git.cs.msu.ru/s02190700/pythonprac"),
    ("Дарья Скворцова", "321", "https://git.cs.msu.ru/s02180534/pythonprac2021"),
    ("Виктор Панферов", "321", "https://git.cs.msu.ru/s02190692/python-prac"),
];

/// Registry lookup table. Order is significant: the resolver keeps the
/// first-listed entry on ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Self {
        let entries = EMBEDDED
            .iter()
            .map(|(owner, group, url)| RegistryEntry::new(owner, group, url))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

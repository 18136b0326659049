/// Id of the sentinel preset that sends the link without a greeting.
pub const NO_MESSAGE_PRESET_ID: &str = "none";

/// A predefined message template with `{NAMA}` / `{LINK}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePreset {
    pub id: &'static str,
    pub label: &'static str,
    pub badge: &'static str,
    pub text: &'static str,
}

pub const MESSAGE_PRESETS: &[MessagePreset] = &[
    MessagePreset {
        id: NO_MESSAGE_PRESET_ID,
        label: "Tanpa pesan",
        badge: "Hanya kirim link",
        text: "",
    },
    MessagePreset {
        id: "indo_formal",
        label: "Bahasa Indonesia",
        badge: "Formal & terhormat",
        text: concat!(
            "Yth. {NAMA},\n\nDengan penuh hormat kami mengundang Bapak/Ibu untuk hadir dalam acara pernikahan kami. ",
            "Kehadiran {NAMA} akan menjadi kehormatan dan kebahagiaan bagi kami sekeluarga.\n\n",
            "Informasi lengkap mengenai waktu dan lokasi acara dapat dilihat pada tautan undangan berikut:\n{LINK}\n\n",
            "Atas perhatian dan doa restunya, kami ucapkan terima kasih.",
        ),
    },
    MessagePreset {
        id: "bali_alus",
        label: "Bahasa Bali Alus",
        badge: "Halus & sangat sopan",
        text: concat!(
            "Om Swastyastu {NAMA},\n\nRaris sareng titiang nyuunangang hadirin ring {NAMA} ring acara pawiwahan sane prasida kalaksanayang. ",
            "Kehadiran {NAMA} dados pakulawargan rahajeng miwah nambahin kabagyan ring titiang sekeluarga.\n\n",
            "Warsa, kala, miwah papan acara prasida katitiang ring pranatan undangan online puniki:\n{LINK}\n\n",
            "Matur suksma sanget ring pangrungu miwah pangrestu sane kaicen.\n\nOm Shanti Shanti Shanti Om.",
        ),
    },
    MessagePreset {
        id: "bali_madya",
        label: "Bahasa Bali Madya",
        badge: "Lebih santai namun sopan",
        text: concat!(
            "Om Swastyastu {NAMA},\n\nTiang ngajak {NAMA} sareng keluarga rauh ring acara pawiwahan tiang. ",
            "Kehadiran {NAMA} nyenengin miwah nambah rahajeng ring acara puniki.\n\n",
            "Waktu lan tempat acara sampun kaatur ring undangan online puniki:\n{LINK}\n\n",
            "Matur suksma sanget atas perhatian lan pangrestu {NAMA}.\n\nOm Shanti Shanti Shanti Om.",
        ),
    },
];

pub fn find_preset(id: &str) -> Option<&'static MessagePreset> {
    MESSAGE_PRESETS.iter().find(|preset| preset.id == id)
}

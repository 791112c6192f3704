//! Тексты интерфейса (английский / Bahasa Indonesia)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Id,
}

impl Lang {
    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Id,
            Lang::Id => Lang::En,
        }
    }
}

pub struct UiText {
    pub title: &'static str,
    pub tagline: &'static str,
    pub upload: &'static str,
    pub upload_subtitle: &'static str,
    pub upload_button: &'static str,
    pub uploading: &'static str,
    pub total_overdue: &'static str,
    pub latest_payment_deadline: &'static str,
    pub contract_overview: &'static str,
    pub translate: &'static str,
    pub no_upcoming_invoices: &'static str,
    pub no_invoice_alerts: &'static str,
    pub no_lease_alerts: &'static str,
    pub no_contracts: &'static str,
    pub loading_contracts: &'static str,
}

pub fn text(lang: Lang) -> &'static UiText {
    match lang {
        Lang::En => &EN,
        Lang::Id => &ID,
    }
}

static EN: UiText = UiText {
    title: "LeaseSync",
    tagline: "Effortless lease contract management for modern businesses",
    upload: "Upload Lease Documents",
    upload_subtitle: "The uploaded documents can be contracts/agreements, invoices, letters of intent, or various other financial or legal documents",
    upload_button: "Upload Documents",
    uploading: "Uploading...",
    total_overdue: "Total Active Invoice Value",
    latest_payment_deadline: "Closest Payment Due",
    contract_overview: "Contract Overview",
    translate: "Terjemahkan ke Bahasa",
    no_upcoming_invoices: "No upcoming invoices",
    no_invoice_alerts: "No urgent invoice alerts",
    no_lease_alerts: "No urgent lease alerts",
    no_contracts: "No contracts uploaded yet.",
    loading_contracts: "Loading contracts...",
};

static ID: UiText = UiText {
    title: "LeaseSync",
    tagline: "Manajemen kontrak sewa yang mudah untuk bisnis modern",
    upload: "Unggah Dokumen",
    upload_subtitle: "Dokumen yang diunggah dapat berupa kontrak/perjanjian, faktur, surat pernyataan minat, atau berbagai dokumen keuangan atau hukum lainnya",
    upload_button: "Unggah Dokumen",
    uploading: "Mengunggah...",
    total_overdue: "Total Tagihan Aktif",
    latest_payment_deadline: "Batas Waktu Pembayaran Terdekat",
    contract_overview: "Ringkasan Kontrak",
    translate: "Translate to English",
    no_upcoming_invoices: "Tidak ada faktur mendatang",
    no_invoice_alerts: "Tidak ada peringatan faktur mendesak",
    no_lease_alerts: "Tidak ada peringatan sewa mendesak",
    no_contracts: "Belum ada kontrak yang diunggah.",
    loading_contracts: "Memuat kontrak...",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(Lang::En.toggled(), Lang::Id);
        assert_eq!(Lang::En.toggled().toggled(), Lang::En);
    }

    #[test]
    fn test_translate_label_names_the_other_language() {
        assert_eq!(text(Lang::En).translate, "Terjemahkan ke Bahasa");
        assert_eq!(text(Lang::Id).translate, "Translate to English");
    }
}

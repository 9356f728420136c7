use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimelineStep {
    pub step: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub timeframe: &'static str,
}

pub static FAQS: [Faq; 5] = [
    Faq {
        question: "Can I work on an F-1 visa?",
        answer: "Yes, but with limitations. F-1 students can work on-campus up to 20 hours per week during the academic year and full-time during breaks. Off-campus employment is generally only available through programs like Curricular Practical Training (CPT) or Optional Practical Training (OPT), which require authorization.",
    },
    Faq {
        question: "How do I pay the SEVIS fee?",
        answer: "The SEVIS fee must be paid through the FMJfee.com website. You'll need your SEVIS ID from your I-20 form. Payment can be made by credit card, check, or international money order. Make sure to print your receipt as proof of payment for your visa interview.",
    },
    Faq {
        question: "What is the MRV fee, and how do I pay it?",
        answer: "The Machine Readable Visa (MRV) fee is the visa application fee. The current fee for F-1 visas is $160 USD. Payment methods vary by embassy/consulate, but typically include bank transfer, credit card, or cash payment at designated banks. Check your local U.S. Embassy website for specific payment instructions.",
    },
    Faq {
        question: "How early can I enter the US on an F-1 visa?",
        answer: "You can enter the United States up to 30 days before the program start date listed on your I-20. Arriving within this window gives you time to settle in, attend orientation, and prepare for your studies.",
    },
    Faq {
        question: "What documents should I bring to my visa interview?",
        answer: "Bring your passport, DS-160 confirmation page, visa application fee receipt, SEVIS fee receipt, Form I-20, university acceptance letter, financial documents (proving you can cover tuition and living expenses), academic credentials, and evidence of ties to your home country.",
    },
];

const STEPS: [(&str, &str, &str); 6] = [
    (
        "Receive University Acceptance",
        "Get admitted to a SEVP-approved school in the United States.",
        "6-12 months before program start",
    ),
    (
        "Receive Form I-20",
        "Your school will issue a Form I-20 after you've been accepted and provided financial documentation.",
        "3-5 months before program start",
    ),
    ("Pay SEVIS Fee", "Pay the I-901 SEVIS Fee online at the FMJfee.com website.", "At least 3 days before visa interview"),
    (
        "Complete DS-160 Form",
        "Fill out the Online Nonimmigrant Visa Application (DS-160) and print the confirmation page.",
        "2-3 months before program start",
    ),
    (
        "Schedule Visa Interview",
        "Contact your local U.S. Embassy or Consulate to schedule your visa interview.",
        "2-3 months before program start",
    ),
    (
        "Attend Visa Interview",
        "Attend your scheduled interview at the U.S. Embassy or Consulate with required documentation.",
        "1-3 months before program start",
    ),
];

/// Steps are numbered from 1 in the order they happen.
pub fn timeline() -> Vec<TimelineStep> {
    STEPS
        .iter()
        .enumerate()
        .map(|(i, &(title, description, timeframe))| TimelineStep {
            step: i + 1,
            title,
            description,
            timeframe,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_timeline_order() {
        let steps = timeline();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[2].title, "Pay SEVIS Fee");
        assert_eq!(steps[5].title, "Attend Visa Interview");
    }

    #[test]
    fn test_faqs_serialize() {
        let v = serde_json::to_value(&FAQS).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 5);
        assert_eq!(v[1]["question"], "How do I pay the SEVIS fee?");
    }
}

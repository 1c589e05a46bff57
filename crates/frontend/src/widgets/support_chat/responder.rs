//! Canned answers of the support chat.
//!
//! Rules are checked in order and the first one with a keyword contained in
//! the lower-cased message wins.

pub const GREETING: &str =
    "👋 Hi! I'm your Sobti Enterprises assistant. How can I help you today?";

pub const QUICK_REPLIES: [&str; 4] = [
    "What products do you offer?",
    "How do I request a quote?",
    "What are your contact details?",
    "Where are you located?",
];

pub const FALLBACK: &str = "I'm not sure I understood that. Here's what I can help with:\n\n\
• Product information\n• Quote requests\n• Contact details\n• Location\n\n\
Or type 'help' for more options. For specific inquiries, please fill out the contact form!";

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: [Rule; 10] = [
    Rule {
        keywords: &["product", "offer", "sell", "catalog"],
        reply: "We offer a wide range of electrical products including switches, sockets, wires, \
cables, and more. You can browse our full catalog on the Products page. Would you like me to \
help you find something specific?",
    },
    Rule {
        keywords: &["quote", "price", "cost", "pricing"],
        reply: "To request a quote:\n\n1. Fill out the contact form\n2. Select the products \
you're interested in\n3. Add your requirements in the message\n4. Submit and we'll get back to \
you within 24 hours!\n\nYou'll receive a reference code to track your inquiry.",
    },
    Rule {
        keywords: &["contact", "phone", "email", "call"],
        reply: "📞 Phone: +91 98120 52133\n📧 Email: sobtienterprises02@gmail.com\n\n\
⏰ Business Hours:\nMon-Sat: 9:00 AM - 6:00 PM\n\nFeel free to call us during business hours \
or email anytime!",
    },
    Rule {
        keywords: &["location", "address", "where", "visit"],
        reply: "📍 We're located at:\n\n1944, Dholkot Area\nAmbala Cantt, Ambala\n\
Haryana 134007, India\n\nYou're welcome to visit us during business hours!",
    },
    Rule {
        keywords: &["delivery", "shipping", "ship"],
        reply: "We deliver across India! Delivery times and charges depend on your location and \
order size. Please request a quote and we'll include delivery details in our response.",
    },
    Rule {
        keywords: &["bulk", "wholesale", "large order"],
        reply: "Yes, we handle bulk and wholesale orders! We offer competitive pricing for large \
quantities. Please submit a quote request with your requirements and we'll provide special bulk \
pricing.",
    },
    Rule {
        keywords: &["thank", "thanks"],
        reply: "You're welcome! 😊 Is there anything else I can help you with?",
    },
    Rule {
        keywords: &["hi", "hello", "hey"],
        reply: "Hello! 👋 How can I assist you today? You can ask me about:\n\n• Our products\n\
• How to request a quote\n• Contact information\n• Our location",
    },
    Rule {
        keywords: &["help"],
        reply: "I'm here to help! Here's what I can assist you with:\n\n• 📦 Product information\n\
• 💰 Quote requests\n• 📞 Contact details\n• 📍 Location & directions\n• 🚚 Delivery information\n\n\
Just type your question!",
    },
    Rule {
        keywords: &["human", "person", "agent", "real"],
        reply: "For direct human support, please:\n\n📞 Call: +91 98120 52133\n\
📧 Email: sobtienterprises02@gmail.com\n\nOr fill out the contact form and we'll get back to \
you within 24 hours!",
    },
];

pub fn reply_for(message: &str) -> &'static str {
    let msg = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| msg.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_replies_hit_their_topics() {
        assert_eq!(reply_for(QUICK_REPLIES[0]), RULES[0].reply);
        assert_eq!(reply_for(QUICK_REPLIES[1]), RULES[1].reply);
        assert_eq!(reply_for(QUICK_REPLIES[2]), RULES[2].reply);
        assert_eq!(reply_for(QUICK_REPLIES[3]), RULES[3].reply);
    }

    #[test]
    fn earlier_rules_win() {
        // "price" (quote) beats "bulk"
        assert_eq!(reply_for("Bulk PRICE list?"), RULES[1].reply);
        // "ship" matches before "thanks"
        assert_eq!(reply_for("thanks, do you ship?"), RULES[4].reply);
    }

    #[test]
    fn matching_is_by_substring() {
        // "this" contains "hi"
        assert_eq!(reply_for("is this open"), RULES[7].reply);
        assert_eq!(reply_for("talk to a human please"), RULES[9].reply);
    }

    #[test]
    fn unknown_text_falls_back() {
        assert_eq!(reply_for("zzz"), FALLBACK);
        assert_eq!(reply_for(""), FALLBACK);
    }
}

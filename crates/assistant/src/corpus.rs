/// A named intent: sample utterances it is trained on and the canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub name: &'static str,
    pub utterances: &'static [&'static str],
    pub answer: &'static str,
}

/// Intents in priority order. Equal scores resolve to the earlier entry.
pub static CORPUS: &[Intent] = &[
    Intent {
        name: "greetings.hello",
        utterances: &["hello", "hi", "hey there", "good morning"],
        answer: "Hello! Welcome to GreenScape. How can I help you today?",
    },
    Intent {
        name: "greetings.howareyou",
        utterances: &["how are you?"],
        answer: "I'm doing great! How about you?",
    },
    Intent {
        name: "bot.identity",
        utterances: &["who are you?", "what is your name?"],
        answer: "I'm GreenScape Bot, here to assist you with landscaping services!",
    },
    Intent {
        name: "company.about",
        utterances: &["what is GreenScape?"],
        answer: "GreenScape is a professional landscaping company specializing in garden design, maintenance, and lawn care.",
    },
    Intent {
        name: "services.list",
        utterances: &["what services do you offer?", "tell me about your services"],
        answer: "We offer landscaping, garden design, lawn care, and full maintenance services.",
    },
    Intent {
        name: "services.lawncare",
        utterances: &["do you provide lawn care?"],
        answer: "Yes! We provide complete lawn care, including mowing, fertilization, and weed control.",
    },
    Intent {
        name: "services.gardendesign",
        utterances: &["do you offer garden design?"],
        answer: "Yes! Our garden design service includes plant selection, layout planning, and installation.",
    },
    Intent {
        name: "services.maintenance",
        utterances: &["what is included in maintenance?"],
        answer: "Our maintenance service includes regular lawn mowing, hedge trimming, and seasonal clean-ups.",
    },
    Intent {
        name: "pricing.info",
        utterances: &["how much do your services cost?", "what are your prices?"],
        answer: "Here is our pricing list:\n- Landscaping: LKR 100000 - LKR 200000 (based on area)\n- Garden Design: LKR 150000  - LKR 450000\n- Lawn Care: LKR 10000 - LKR 20000 per session\n- Maintenance: LKR 30000 - LKR 150000 per month.",
    },
    Intent {
        name: "pricing.landscaping",
        utterances: &["what is the price for landscaping?"],
        answer: "Our landscaping services range from **LKR 100000 - LKR 200000**, depending on the size and complexity of the project.",
    },
    Intent {
        name: "pricing.gardendesign",
        utterances: &["what is the cost of garden design?"],
        answer: "Garden design services range from **LKR 150000  - LKR 450000**, including plant selection and layout planning.",
    },
    Intent {
        name: "pricing.lawncare",
        utterances: &["how much for lawn care?"],
        answer: "Lawn care services cost **LKR 10000 - LKR 20000 per session**, covering mowing, fertilization, and weed control.",
    },
    Intent {
        name: "pricing.maintenance",
        utterances: &["what does maintenance cost?"],
        answer: "Maintenance services start at **LKR 30000 - LKR 150000 per month**, based on the frequency and services required.",
    },
    Intent {
        name: "contact.info",
        utterances: &[
            "how can I contact you?",
            "what is your phone number?",
            "do you have an email?",
        ],
        answer: "You can reach us at (+94) 123-45678 or email us at contact@greenscape.com.",
    },
    Intent {
        name: "greetings.bye",
        utterances: &["Thanks", "Thankyou", "bye", "goodbye"],
        answer: "Goodbye! Looking forward to helping you again!",
    },
];

//! Localized text bundles.
//!
//! One `static` [`Translations`] per [`Language`](super::language::Language).
//! Adding a field forces every bundle to provide it at compile time.

pub struct Translations {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub missing_credentials: &'static str,
    pub invalid_license: &'static str,
    pub short_system_id: &'static str,
    pub unlocked: &'static str,
    /// Monday through Friday.
    pub weekdays: [&'static str; 5],
    pub routine_items: &'static [&'static str],
    pub biases: &'static [&'static str],
    pub affirmations: &'static [&'static str],
    pub routine_incomplete: &'static str,
    pub biases_needed: &'static str,
    pub focus_needed: &'static str,
    pub mind_aligned: &'static str,
    pub coach_intro: &'static str,
    pub coach_fallback: &'static str,
    pub streak_label: &'static str,
    /// Message a user sends to the admin: `(system_id, request_token)`.
    pub request_template: fn(&str, &str) -> String,
    /// Reply the admin sends back: `(system_id, license_key)`.
    pub response_template: fn(&str, &str) -> String,
}

pub static MR: Translations = Translations {
    app_title: "Ficus Sentinel",
    subtitle: "ट्रेडिंग शिस्त",
    missing_credentials: "कृपया सिस्टिम आयडी आणि लायसन्स की दोन्ही भरा.",
    invalid_license: "चुकीची लायसन्स की! कृपया अ‍ॅडमिनकडून नवीन की मिळवा.",
    short_system_id: "सिस्टम आयडी खूप लहान आहे (किमान २ अक्षरे हवीत).",
    unlocked: "अ‍ॅप अनलॉक झाले आहे.",
    weekdays: ["सोम", "मंगळ", "बुध", "गुरु", "शुक्र"],
    routine_items: &[
        "आजचा ट्रेडिंग प्लॅन लिहिला आहे",
        "जास्तीत जास्त तोटा (Max Loss) ठरवला आहे",
        "प्रत्येक ट्रेडसाठी स्टॉप-लॉस ठरवला आहे",
        "बातम्या आणि इव्हेंट्स तपासले आहेत",
        "मन शांत आहे, बदला घेण्याची भावना नाही",
    ],
    biases: &[
        "FOMO (संधी हुकण्याची भीती)",
        "बदला घेणारे ट्रेडिंग",
        "अति-आत्मविश्वास",
        "लोभ",
        "नुकसान टाळण्याची वृत्ती",
    ],
    affirmations: &[
        "शिस्त हीच नफ्याची गुरुकिल्ली आहे.",
        "मी माझ्या प्लॅननुसारच ट्रेड करतो.",
        "तोटा हा व्यवसायाचा भाग आहे, मी तो स्वीकारतो.",
    ],
    routine_incomplete: "आधी संपूर्ण दिनचर्या पूर्ण करा.",
    biases_needed: "किमान दोन मानसिक पूर्वग्रह ओळखा.",
    focus_needed: "आधी फोकस कॅलिब्रेशन पूर्ण करा.",
    mind_aligned: "मन एकाग्र झाले आहे!",
    coach_intro: "नमस्कार! मी तुमचा फिकस ट्रेडिंग कोच आहे. आज तुमचे मन कसे आहे?",
    coach_fallback: "क्षमस्व, मला जोडणी करताना तांत्रिक अडचण आली. पण लक्षात ठेवा, शिस्त हीच नफ्याची गुरुकिल्ली आहे.",
    streak_label: "शिस्तीचे दिवस",
    request_template: mr_request,
    response_template: mr_response,
};

pub static HI: Translations = Translations {
    app_title: "Ficus Sentinel",
    subtitle: "ट्रेडिंग अनुशासन",
    missing_credentials: "कृपया सिस्टम आईडी और लाइसेंस की दोनों भरें।",
    invalid_license: "गलत लाइसेंस की! कृपया एडमिन से नई की लें।",
    short_system_id: "सिस्टम आईडी बहुत छोटी है (कम से कम 2 अक्षर चाहिए)।",
    unlocked: "ऐप अनलॉक हो गया है।",
    weekdays: ["सोम", "मंगल", "बुध", "गुरु", "शुक्र"],
    routine_items: &[
        "आज का ट्रेडिंग प्लान लिखा है",
        "अधिकतम नुकसान (Max Loss) तय किया है",
        "हर ट्रेड के लिए स्टॉप-लॉस तय किया है",
        "खबरें और इवेंट्स जांच लिए हैं",
        "मन शांत है, बदले की भावना नहीं है",
    ],
    biases: &[
        "FOMO (मौका छूटने का डर)",
        "बदले की ट्रेडिंग",
        "अति-आत्मविश्वास",
        "लालच",
        "नुकसान से बचने की प्रवृत्ति",
    ],
    affirmations: &[
        "अनुशासन ही मुनाफे की कुंजी है।",
        "मैं केवल अपने प्लान के अनुसार ट्रेड करता हूं।",
        "नुकसान व्यापार का हिस्सा है, मैं उसे स्वीकार करता हूं।",
    ],
    routine_incomplete: "पहले पूरी दिनचर्या पूरी करें।",
    biases_needed: "कम से कम दो मानसिक पूर्वाग्रह पहचानें।",
    focus_needed: "पहले फोकस कैलिब्रेशन पूरा करें।",
    mind_aligned: "मन एकाग्र हो गया है!",
    coach_intro: "नमस्ते! मैं आपका फिकस ट्रेडिंग कोच हूं। आज आपका मन कैसा है?",
    coach_fallback: "क्षमा करें, मुझे कनेक्ट करने में तकनीकी समस्या हुई। याद रखें, अनुशासन ही मुनाफे की कुंजी है।",
    streak_label: "अनुशासन के दिन",
    request_template: hi_request,
    response_template: hi_response,
};

pub static EN: Translations = Translations {
    app_title: "Ficus Sentinel",
    subtitle: "Trading Discipline",
    missing_credentials: "Please fill both ID and License Key.",
    invalid_license: "Invalid License Key! Get a new one from Admin.",
    short_system_id: "System ID is too short (at least 2 characters).",
    unlocked: "Unlocked.",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri"],
    routine_items: &[
        "Today's trading plan is written down",
        "Maximum daily loss is fixed",
        "Stop-loss is defined for every trade",
        "News and events are checked",
        "Mind is calm, no urge for revenge",
    ],
    biases: &[
        "FOMO",
        "Revenge trading",
        "Overconfidence",
        "Greed",
        "Loss aversion",
    ],
    affirmations: &[
        "Discipline is the key to profitability.",
        "I only take trades that match my plan.",
        "Losses are a cost of doing business; I accept them.",
    ],
    routine_incomplete: "Complete the whole routine first.",
    biases_needed: "Acknowledge at least two cognitive biases.",
    focus_needed: "Finish the focus calibration first.",
    mind_aligned: "Mind aligned!",
    coach_intro: "Hello! I am your Ficus trading coach. How is your mind today?",
    coach_fallback: "Sorry, I encountered a technical issue. Remember, discipline is the key to profitability.",
    streak_label: "Days of discipline",
    request_template: en_request,
    response_template: en_response,
};

fn mr_request(sid: &str, token: &str) -> String {
    format!(
        "🙏 नमस्कार, मला लायसन्स की हवी आहे.\n\n🆔 *ID:* {sid}\n🔑 *Request:* {token}\n\nकृपया माझी की पाठवा."
    )
}

fn mr_response(sid: &str, key: &str) -> String {
    format!(
        "✅ *तुमची लायसन्स की तयार आहे!*\n\n💻 *System ID:* {sid}\n🔑 *License Key:* {key}\n\n*कसे वापरावे:*\n१. ही की कॉपी करा.\n२. अ‍ॅपमध्ये पेस्ट करा.\n३. 'Unlock' बटण दाबा.\n\nधन्यवाद! 🙏"
    )
}

fn hi_request(sid: &str, token: &str) -> String {
    format!(
        "🙏 नमस्ते, मुझे लाइसेंस की चाहिए।\n\n🆔 *ID:* {sid}\n🔑 *Request:* {token}\n\nकृपया मेरी की भेजें।"
    )
}

fn hi_response(sid: &str, key: &str) -> String {
    format!(
        "✅ *आपकी लाइसेंस की तैयार है!*\n\n💻 *System ID:* {sid}\n🔑 *License Key:* {key}\n\n*कैसे इस्तेमाल करें:*\n1. यह की कॉपी करें।\n2. ऐप में पेस्ट करें।\n3. 'Unlock' बटन दबाएं।\n\nधन्यवाद! 🙏"
    )
}

fn en_request(sid: &str, token: &str) -> String {
    format!(
        "🙏 Hello, I would like a license key.\n\n🆔 *ID:* {sid}\n🔑 *Request:* {token}\n\nPlease send my key."
    )
}

fn en_response(sid: &str, key: &str) -> String {
    format!(
        "✅ *Your license key is ready!*\n\n💻 *System ID:* {sid}\n🔑 *License Key:* {key}\n\n*How to use:*\n1. Copy this key.\n2. Paste it into the app.\n3. Press 'Unlock'.\n\nThank you! 🙏"
    )
}

/// One translatable string. An empty string marks a language that has no
/// translation yet; lookups fall back to English for it.
#[derive(Debug)]
pub(crate) struct Entry {
    pub key: &'static str,
    pub en: &'static str,
    pub ru: &'static str,
    pub ja: &'static str,
    pub es: &'static str,
}

pub(crate) const ENTRIES: &[Entry] = &[
    // Wheel
    Entry {
        key: "heroTitle",
        en: "Yes or No Wheel",
        ru: "Колесо Да или Нет",
        ja: "はい/いいえホイール",
        es: "Rueda de Sí o No",
    },
    Entry {
        key: "cantDecide",
        en: "Can't decide? Let the wheel decide for you!",
        ru: "Не можете решить? Пусть колесо решит за вас!",
        ja: "決められない？ホイールに決めてもらおう！",
        es: "¿No puedes decidir? ¡Deja que la rueda decida por ti!",
    },
    Entry {
        key: "heroDescription",
        en: "Need help making a decision? Let fate decide! Spin the wheel and get an instant Yes or No answer.",
        ru: "Нужна помощь в принятии решения? Пусть судьба решит! Крутите колесо и получите мгновенный ответ Да или Нет.",
        ja: "決断に迷っていますか？運命に任せましょう！ホイールを回して、すぐに「はい」か「いいえ」の答えを得ましょう。",
        es: "¿Necesitas ayuda para tomar una decisión? ¡Deja que el destino decida! Gira la rueda y obtén una respuesta instantánea de Sí o No.",
    },
    Entry {
        key: "spinButton",
        en: "SPIN THE WHEEL!",
        ru: "КРУТИТЬ КОЛЕСО!",
        ja: "ホイールを回す！",
        es: "¡GIRAR LA RUEDA!",
    },
    Entry {
        key: "spinning",
        en: "Spinning...",
        ru: "Вращается...",
        ja: "回転中...",
        es: "Girando...",
    },
    Entry {
        key: "yes",
        en: "YES",
        ru: "ДА",
        ja: "はい",
        es: "SÍ",
    },
    Entry {
        key: "no",
        en: "NO",
        ru: "НЕТ",
        ja: "いいえ",
        es: "NO",
    },
    Entry {
        key: "yourAnswer",
        en: "Your answer is:",
        ru: "Ваш ответ:",
        ja: "あなたの答えは:",
        es: "Tu respuesta es:",
    },
    Entry {
        key: "decisionMade",
        en: "Your decision has been made!",
        ru: "Решение принято!",
        ja: "決断が下されました！",
        es: "¡Tu decisión está tomada!",
    },
    Entry {
        key: "recentResults",
        en: "Recent Results:",
        ru: "Последние результаты:",
        ja: "最近の結果:",
        es: "Resultados recientes:",
    },
    Entry {
        key: "instruction1",
        en: "Click the button above to spin the wheel and get your answer.",
        ru: "Нажмите кнопку выше, чтобы крутить колесо и получить ответ.",
        ja: "上のボタンをクリックしてホイールを回し、答えを得ましょう。",
        es: "Haz clic en el botón de arriba para girar la rueda y obtener tu respuesta.",
    },
    Entry {
        key: "instruction2",
        en: "The wheel will randomly land on YES or NO.",
        ru: "Колесо случайно остановится на ДА или НЕТ.",
        ja: "ホイールはランダムに「はい」または「いいえ」に止まります。",
        es: "La rueda caerá aleatoriamente en SÍ o NO.",
    },
    Entry {
        key: "instruction3",
        en: "Perfect for making quick decisions when you're indecisive!",
        ru: "Идеально для быстрых решений, когда вы не можете определиться!",
        ja: "優柔不断なときに素早く決断するのに最適です！",
        es: "¡Perfecto para tomar decisiones rápidas cuando eres indeciso!",
    },
    Entry {
        key: "keyboardHint",
        en: "Tip: press Space or Enter to spin.",
        ru: "Совет: нажмите Пробел или Enter, чтобы крутить.",
        ja: "ヒント: スペースキーまたはEnterキーでも回せます。",
        es: "Consejo: pulsa Espacio o Intro para girar.",
    },
    // FAQ
    Entry {
        key: "faqTitle",
        en: "Frequently Asked Questions",
        ru: "Часто задаваемые вопросы",
        ja: "よくある質問",
        es: "Preguntas frecuentes",
    },
    Entry {
        key: "faq1Question",
        en: "How does the Yes or No wheel work?",
        ru: "Как работает колесо Да или Нет?",
        ja: "はい/いいえホイールはどのように機能しますか？",
        es: "¿Cómo funciona la rueda de Sí o No?",
    },
    Entry {
        key: "faq1Answer",
        en: "Simply click the \"Spin the Wheel\" button, and the wheel will spin randomly. When it stops, it will land on either \"Yes\" or \"No\", giving you a random answer to help with your decision.",
        ru: "Просто нажмите кнопку \"Крутить колесо\", и колесо будет случайно вращаться. Когда оно остановится, оно укажет на \"Да\" или \"Нет\".",
        ja: "「ホイールを回す」ボタンをクリックするだけで、ホイールがランダムに回転します。停止すると、「はい」または「いいえ」に着地します。",
        es: "Simplemente haz clic en el botón \"Girar la rueda\" y la rueda girará aleatoriamente. Cuando se detenga, caerá en \"Sí\" o \"No\".",
    },
    Entry {
        key: "faq2Question",
        en: "Is the result truly random?",
        ru: "Результат действительно случайный?",
        ja: "結果は本当にランダムですか？",
        es: "¿El resultado es verdaderamente aleatorio?",
    },
    Entry {
        key: "faq2Answer",
        en: "Yes! Every spin draws from a uniform random number generator in your browser. Each spin has an equal 50/50 chance and does not depend on earlier spins.",
        ru: "Да! Каждое вращение использует равномерный генератор случайных чисел в вашем браузере. Каждое вращение имеет равные шансы 50/50.",
        ja: "はい！各スピンはブラウザ内の一様乱数生成器を使用します。毎回50/50の確率です。",
        es: "¡Sí! Cada giro usa un generador de números aleatorios uniforme en tu navegador. Cada giro tiene la misma probabilidad del 50/50.",
    },
    Entry {
        key: "faq3Question",
        en: "Can I use this for important decisions?",
        ru: "Могу ли я использовать это для важных решений?",
        ja: "重要な決定にこれを使用できますか？",
        es: "¿Puedo usar esto para decisiones importantes?",
    },
    Entry {
        key: "faq3Answer",
        en: "While the wheel is fun and can help break decision paralysis, we recommend using it for light decisions. For important life decisions, please consult with professionals.",
        ru: "Хотя колесо забавно, мы рекомендуем использовать его для легких решений. Для важных решений обратитесь к специалистам.",
        ja: "ホイールは楽しいですが、重要な決定には専門家に相談することをお勧めします。",
        es: "Si bien la rueda es divertida, recomendamos usarla para decisiones ligeras. Para decisiones importantes, consulta con profesionales.",
    },
    Entry {
        key: "faq4Question",
        en: "Does the wheel work on mobile devices?",
        ru: "Работает ли колесо на мобильных устройствах?",
        ja: "ホイールはモバイルデバイスで動作しますか？",
        es: "¿La rueda funciona en dispositivos móviles?",
    },
    Entry {
        key: "faq4Answer",
        en: "Yes! The wheel is fully responsive and works perfectly on smartphones, tablets, and desktop computers.",
        ru: "Да! Колесо полностью адаптивно и отлично работает на смартфонах, планшетах и компьютерах.",
        ja: "はい！ホイールは完全にレスポンシブで、スマートフォン、タブレット、デスクトップで完璧に動作します。",
        es: "¡Sí! La rueda es totalmente receptiva y funciona perfectamente en teléfonos, tabletas y computadoras.",
    },
    Entry {
        key: "faq5Question",
        en: "What languages are supported?",
        ru: "Какие языки поддерживаются?",
        ja: "どの言語がサポートされていますか？",
        es: "¿Qué idiomas son compatibles?",
    },
    Entry {
        key: "faq5Answer",
        en: "The wheel supports English, Russian, Japanese, and Spanish. Switch languages using the selector in the top-right corner.",
        ru: "Колесо поддерживает английский, русский, японский и испанский языки. Переключайте языки в правом верхнем углу.",
        ja: "ホイールは英語、ロシア語、日本語、スペイン語をサポートしています。右上のセレクターで切り替えられます。",
        es: "La rueda es compatible con inglés, ruso, japonés y español. Cambia de idioma usando el selector en la esquina superior derecha.",
    },
    Entry {
        key: "faq6Question",
        en: "Can I spin the wheel multiple times?",
        ru: "Могу ли я крутить колесо несколько раз?",
        ja: "ホイールを複数回回すことができますか？",
        es: "¿Puedo girar la rueda varias veces?",
    },
    Entry {
        key: "faq6Answer",
        en: "Yes! You can spin as many times as you want. Each spin is independent with the same 50/50 probability.",
        ru: "Да! Вы можете крутить сколько угодно раз. Каждое вращение независимо с вероятностью 50/50.",
        ja: "はい！何度でも回せます。各スピンは独立しており、同じ50/50の確率です。",
        es: "¡Sí! Puedes girar tantas veces como quieras. Cada giro es independiente con la misma probabilidad del 50/50.",
    },
    Entry {
        key: "faq7Question",
        en: "Is my data collected when using the wheel?",
        ru: "Собираются ли мои данные?",
        ja: "データは収集されますか？",
        es: "¿Se recopilan mis datos?",
    },
    Entry {
        key: "faq7Answer",
        en: "No! The wheel runs entirely in your browser. We do not collect, store, or transmit any of your decisions or personal information.",
        ru: "Нет! Колесо работает полностью в браузере. Мы не собираем и не храним ваши данные.",
        ja: "いいえ！ホイールはブラウザ内で完全に動作します。データは収集されません。",
        es: "¡No! La rueda se ejecuta completamente en tu navegador. No recopilamos ningún dato personal.",
    },
    // Footer and navigation
    Entry {
        key: "footerText",
        en: "All rights reserved.",
        ru: "Все права защищены.",
        ja: "全著作権所有。",
        es: "Todos los derechos reservados.",
    },
    Entry {
        key: "aboutUs",
        en: "About Us",
        ru: "О нас",
        ja: "私たちについて",
        es: "Sobre nosotros",
    },
    Entry {
        key: "contact",
        en: "Contact",
        ru: "Контакты",
        ja: "お問い合わせ",
        es: "Contacto",
    },
    Entry {
        key: "privacyPolicy",
        en: "Privacy Policy",
        ru: "Политика конфиденциальности",
        ja: "プライバシーポリシー",
        es: "Política de privacidad",
    },
    Entry {
        key: "visitHome",
        en: "Spin the Wheel",
        ru: "Крутить колесо",
        ja: "ホイールを回す",
        es: "Girar la rueda",
    },
    Entry {
        key: "languageLabel",
        en: "Language",
        ru: "Язык",
        ja: "言語",
        es: "Idioma",
    },
    Entry {
        key: "themeToggle",
        en: "Toggle theme",
        ru: "Сменить тему",
        ja: "テーマを切り替え",
        es: "Cambiar tema",
    },
    Entry {
        key: "themeLight",
        en: "Light",
        ru: "Светлая",
        ja: "ライト",
        es: "Claro",
    },
    Entry {
        key: "themeDark",
        en: "Dark",
        ru: "Тёмная",
        ja: "ダーク",
        es: "Oscuro",
    },
    Entry {
        key: "themeSystem",
        en: "System",
        ru: "Системная",
        ja: "システム",
        es: "Sistema",
    },
    Entry {
        key: "notFoundTitle",
        en: "Page not found",
        ru: "Страница не найдена",
        ja: "ページが見つかりません",
        es: "Página no encontrada",
    },
    Entry {
        key: "notFoundText",
        en: "The page you are looking for does not exist. The wheel is still waiting for you, though.",
        ru: "",
        ja: "",
        es: "La página que buscas no existe. Pero la rueda todavía te espera.",
    },
    // About
    Entry {
        key: "aboutTitle",
        en: "About Yes or No Wheel",
        ru: "О колесе Да или Нет",
        ja: "はい/いいえホイールについて",
        es: "Sobre la Rueda de Sí o No",
    },
    Entry {
        key: "aboutDescription1",
        en: "Yes or No Wheel is a free, simple tool for the moments when you just cannot make up your mind. One spin, one answer.",
        ru: "",
        ja: "",
        es: "La Rueda de Sí o No es una herramienta gratuita y sencilla para los momentos en que no puedes decidirte. Un giro, una respuesta.",
    },
    Entry {
        key: "ourStory",
        en: "Our Story",
        ru: "Наша история",
        ja: "私たちの物語",
        es: "Nuestra historia",
    },
    Entry {
        key: "ourStoryText",
        en: "We built the wheel after one too many evenings spent debating where to eat. Handing small choices to chance turned out to be fun, fast, and surprisingly freeing.",
        ru: "",
        ja: "",
        es: "Creamos la rueda después de demasiadas noches discutiendo dónde cenar. Dejar las pequeñas decisiones al azar resultó ser divertido, rápido y sorprendentemente liberador.",
    },
    Entry {
        key: "aboutDescription2",
        en: "Every spin is independent and fair: YES and NO each have exactly a 50% chance.",
        ru: "",
        ja: "",
        es: "Cada giro es independiente y justo: SÍ y NO tienen exactamente un 50% de probabilidad.",
    },
    Entry {
        key: "aboutDescription3",
        en: "The wheel runs entirely in your browser, works on any device, and is available in four languages.",
        ru: "",
        ja: "",
        es: "La rueda funciona completamente en tu navegador, en cualquier dispositivo y en cuatro idiomas.",
    },
    Entry {
        key: "whyChooseUs",
        en: "Why Choose Us",
        ru: "Почему мы",
        ja: "選ばれる理由",
        es: "Por qué elegirnos",
    },
    Entry {
        key: "feature1Title",
        en: "Instant answers",
        ru: "Мгновенные ответы",
        ja: "即座に答え",
        es: "Respuestas instantáneas",
    },
    Entry {
        key: "feature1Text",
        en: "One click and three seconds later you have a decision.",
        ru: "",
        ja: "",
        es: "Un clic y tres segundos después tienes una decisión.",
    },
    Entry {
        key: "feature2Title",
        en: "Truly fair",
        ru: "Честно",
        ja: "公平",
        es: "Realmente justo",
    },
    Entry {
        key: "feature2Text",
        en: "Each spin is an independent 50/50 draw.",
        ru: "",
        ja: "",
        es: "Cada giro es un sorteo independiente 50/50.",
    },
    Entry {
        key: "feature3Title",
        en: "Private by default",
        ru: "Конфиденциально",
        ja: "プライバシー重視",
        es: "Privado por defecto",
    },
    Entry {
        key: "feature3Text",
        en: "No accounts, no tracking, nothing leaves your browser.",
        ru: "",
        ja: "",
        es: "Sin cuentas, sin seguimiento, nada sale de tu navegador.",
    },
    // Contact
    Entry {
        key: "contactTitle",
        en: "Contact Us",
        ru: "Свяжитесь с нами",
        ja: "お問い合わせ",
        es: "Contáctanos",
    },
    Entry {
        key: "getInTouchText",
        en: "We'd love to hear from you!",
        ru: "Мы будем рады вашему сообщению!",
        ja: "ご連絡をお待ちしています！",
        es: "¡Nos encantaría saber de ti!",
    },
    Entry {
        key: "contactDescription",
        en: "Questions, feedback, a translation fix or an idea for the wheel? Send us an email.",
        ru: "",
        ja: "",
        es: "¿Preguntas, comentarios, una corrección de traducción o una idea para la rueda? Envíanos un correo.",
    },
    Entry {
        key: "contactEmail",
        en: "Email",
        ru: "Эл. почта",
        ja: "メール",
        es: "Correo electrónico",
    },
    Entry {
        key: "contactResponse",
        en: "We usually reply within two business days.",
        ru: "",
        ja: "",
        es: "Normalmente respondemos en dos días hábiles.",
    },
    // Privacy
    Entry {
        key: "privacyTitle",
        en: "Privacy Policy",
        ru: "Политика конфиденциальности",
        ja: "プライバシーポリシー",
        es: "Política de privacidad",
    },
    Entry {
        key: "privacyLastUpdated",
        en: "Last updated: November 26, 2025",
        ru: "Последнее обновление: 26 ноября 2025 г.",
        ja: "最終更新日: 2025年11月26日",
        es: "Última actualización: 26 de noviembre de 2025",
    },
    Entry {
        key: "privacyIntro",
        en: "Your privacy matters to us. This page explains what the Yes or No Wheel does, and does not do, with your information.",
        ru: "",
        ja: "",
        es: "Tu privacidad nos importa. Esta página explica qué hace y qué no hace la Rueda de Sí o No con tu información.",
    },
    Entry {
        key: "privacySection1Title",
        en: "Information we collect",
        ru: "Какие данные мы собираем",
        ja: "収集する情報",
        es: "Información que recopilamos",
    },
    Entry {
        key: "privacySection1Content",
        en: "None. Spins happen in your browser and their results are never sent to our servers.",
        ru: "",
        ja: "",
        es: "Ninguna. Los giros ocurren en tu navegador y sus resultados nunca se envían a nuestros servidores.",
    },
    Entry {
        key: "privacySection2Title",
        en: "Local storage",
        ru: "Локальное хранилище",
        ja: "ローカルストレージ",
        es: "Almacenamiento local",
    },
    Entry {
        key: "privacySection2Content",
        en: "We remember your language and theme preference in your browser's local storage. Clearing site data removes them.",
        ru: "",
        ja: "",
        es: "Guardamos tu idioma y tema preferidos en el almacenamiento local de tu navegador. Borrar los datos del sitio los elimina.",
    },
    Entry {
        key: "privacySection3Title",
        en: "Cookies",
        ru: "Файлы cookie",
        ja: "クッキー",
        es: "Cookies",
    },
    Entry {
        key: "privacySection3Content",
        en: "The wheel does not set cookies.",
        ru: "",
        ja: "",
        es: "La rueda no utiliza cookies.",
    },
    Entry {
        key: "privacySection4Title",
        en: "Third parties",
        ru: "Третьи стороны",
        ja: "第三者",
        es: "Terceros",
    },
    Entry {
        key: "privacySection4Content",
        en: "We do not share, sell, or transmit any data to third parties.",
        ru: "",
        ja: "",
        es: "No compartimos, vendemos ni transmitimos datos a terceros.",
    },
    Entry {
        key: "privacySection5Title",
        en: "Changes to this policy",
        ru: "Изменения политики",
        ja: "ポリシーの変更",
        es: "Cambios en esta política",
    },
    Entry {
        key: "privacySection5Content",
        en: "If this policy changes, the date at the top of this page will change with it.",
        ru: "",
        ja: "",
        es: "Si esta política cambia, la fecha al principio de esta página cambiará con ella.",
    },
    Entry {
        key: "privacyContact",
        en: "Questions about privacy? Write to",
        ru: "Вопросы о конфиденциальности? Пишите на",
        ja: "プライバシーに関するご質問は",
        es: "¿Preguntas sobre privacidad? Escribe a",
    },
    // Page titles and descriptions used for metadata
    Entry {
        key: "metaHomeTitle",
        en: "Yes or No Wheel - Make Quick Decisions Instantly",
        ru: "Колесо Да или Нет - Принимайте быстрые решения мгновенно",
        ja: "はい/いいえホイール - 素早く決断を下す",
        es: "Rueda de Sí o No - Toma decisiones rápidas al instante",
    },
    Entry {
        key: "metaHomeDescription",
        en: "Spin the wheel to get a quick Yes or No answer. A fun and simple decision-making tool for when you need help making choices.",
        ru: "Крутите колесо, чтобы получить быстрый ответ Да или Нет. Забавный и простой инструмент для принятия решений.",
        ja: "ホイールを回して、すぐに「はい」または「いいえ」の答えを得ましょう。決断に迷った時の楽しくシンプルなツールです。",
        es: "Gira la rueda para obtener una respuesta rápida de Sí o No. Una herramienta divertida y simple para tomar decisiones.",
    },
    Entry {
        key: "metaHomeKeywords",
        en: "yes no wheel, decision maker, wheel spinner, random choice, decision tool",
        ru: "да нет колесо, генератор решений, случайный выбор, инструмент принятия решений",
        ja: "はいいいえ ホイール, 決断, 乱数, 意思決定",
        es: "rueda si no, toma decisiones, girador aleatorio, herramienta de decisión",
    },
    Entry {
        key: "metaAboutTitle",
        en: "About Us - Yes or No Wheel",
        ru: "О нас - Колесо Да или Нет",
        ja: "私たちについて - はい/いいえ Wheel",
        es: "Sobre nosotros - Yes or No Wheel",
    },
    Entry {
        key: "metaAboutDescription",
        en: "Learn about the Yes or No Wheel, a free and fair decision-making tool that runs entirely in your browser.",
        ru: "Узнайте о колесе Да или Нет, бесплатном и честном инструменте для принятия решений.",
        ja: "ブラウザだけで動く無料で公平な意思決定ツール、はい/いいえホイールについて。",
        es: "Conoce la Rueda de Sí o No, una herramienta gratuita y justa para tomar decisiones.",
    },
    Entry {
        key: "metaContactTitle",
        en: "Contact Us - Yes or No Wheel",
        ru: "Контакты - Колесо Да или Нет",
        ja: "お問い合わせ - はい/いいえ Wheel",
        es: "Contacto - Yes or No Wheel",
    },
    Entry {
        key: "metaContactDescription",
        en: "Get in touch with the Yes or No Wheel team. We'd love to hear your questions, feedback, or suggestions.",
        ru: "Свяжитесь с командой Yes or No Wheel. Мы будем рады вашим вопросам и предложениям.",
        ja: "はい/いいえ Wheelチームにお問い合わせください。フィードバックをお待ちしています。",
        es: "Ponte en contacto con el equipo de Yes or No Wheel. Nos encantaría saber tus preguntas o sugerencias.",
    },
    Entry {
        key: "metaPrivacyTitle",
        en: "Privacy Policy - Yes or No Wheel",
        ru: "Политика конфиденциальности - Колесо Да или Нет",
        ja: "プライバシーポリシー - はい/いいえ Wheel",
        es: "Política de privacidad - Yes or No Wheel",
    },
    Entry {
        key: "metaPrivacyDescription",
        en: "The Yes or No Wheel collects no personal data. Read how your language and theme preferences stay in your browser.",
        ru: "Колесо Да или Нет не собирает персональные данные.",
        ja: "はい/いいえホイールは個人データを収集しません。",
        es: "La Rueda de Sí o No no recopila datos personales.",
    },
];

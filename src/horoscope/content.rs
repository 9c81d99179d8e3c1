//! Canned horoscope material compiled into the binary.

use crate::zodiac::ZodiacSign;

pub const GENERIC_AFFIRMATION: &str = "I embrace the unique qualities that make me who I am.";

pub const DEFAULT_LUCKY_BASE: [u32; 4] = [7, 14, 21, 28];

pub fn passages(sign: ZodiacSign) -> &'static [&'static str; 5] {
    match sign {
        ZodiacSign::Aries => &[
            "Today brings exciting opportunities for leadership. Your natural enthusiasm will inspire others around you.",
            "The stars align to boost your confidence. Take that bold step you've been considering.",
            "Adventure calls to you today. Embrace new experiences with your characteristic courage.",
            "Your energy is infectious today. Channel it into creative projects for amazing results.",
            "A chance encounter may lead to something significant. Stay open to unexpected possibilities.",
        ],
        ZodiacSign::Taurus => &[
            "Stability and comfort are your focus today. Take time to enjoy life's simple pleasures.",
            "Your practical approach will solve a lingering problem. Trust your methodical nature.",
            "Beauty surrounds you today. Indulge in art, music, or nature to feed your soul.",
            "Patience will be rewarded. The slow and steady approach wins the race today.",
            "Financial matters look favorable. Your conservative approach to money serves you well.",
        ],
        ZodiacSign::Gemini => &[
            "Communication flows easily today. Your words have the power to bridge differences.",
            "Curiosity leads to fascinating discoveries. Follow your interests wherever they may lead.",
            "Social connections bring unexpected benefits. Network and make new friends today.",
            "Your adaptability is your greatest strength. Embrace change with your characteristic flexibility.",
            "Mental stimulation is key today. Engage in learning something completely new.",
        ],
        ZodiacSign::Cancer => &[
            "Home and family take center stage. Create a nurturing environment for yourself and loved ones.",
            "Your intuition is particularly strong today. Trust those gut feelings and emotional insights.",
            "Past experiences offer valuable lessons. Reflect on how far you've come in your journey.",
            "Emotional connections deepen today. Share your feelings with someone you trust.",
            "Self-care is essential. Listen to your body and give it the rest and nourishment it needs.",
        ],
        ZodiacSign::Leo => &[
            "Your natural charisma shines brightly today. Step into the spotlight and share your talents.",
            "Creative expression brings joy and recognition. Let your artistic side flourish.",
            "Leadership opportunities present themselves. Your confident approach inspires others.",
            "Generosity and warmth attract positive energy. Share your abundance with others.",
            "Romance and fun are highlighted. Plan something special with someone you care about.",
        ],
        ZodiacSign::Virgo => &[
            "Attention to detail pays off today. Your meticulous approach yields perfect results.",
            "Organization and planning set you up for success. Create systems that serve your goals.",
            "Health and wellness deserve focus. Small improvements in routine make big differences.",
            "Your analytical skills solve complex problems. Others seek your practical wisdom.",
            "Service to others brings deep satisfaction. Look for ways to help and support your community.",
        ],
        ZodiacSign::Libra => &[
            "Balance and harmony guide your decisions today. Seek the middle ground in conflicts.",
            "Partnerships flourish under today's energy. Collaboration brings mutual benefits.",
            "Beauty and aesthetics inspire you. Surround yourself with things that please your senses.",
            "Diplomatic skills help resolve tensions. Your fair approach earns respect from all sides.",
            "Justice and fairness motivate your actions. Stand up for what's right with grace and poise.",
        ],
        ZodiacSign::Scorpio => &[
            "Deep transformation is possible today. Embrace the power of renewal and rebirth.",
            "Your intensity and focus achieve remarkable results. Channel your passion productively.",
            "Hidden truths come to light. Your investigative nature uncovers important information.",
            "Emotional depth strengthens relationships. Share your authentic self with trusted allies.",
            "Mysterious opportunities present themselves. Trust your instincts to guide you forward.",
        ],
        ZodiacSign::Sagittarius => &[
            "Adventure and exploration call to your spirit. Expand your horizons through new experiences.",
            "Philosophical insights illuminate your path. Seek wisdom through study and contemplation.",
            "Optimism and enthusiasm attract good fortune. Your positive outlook inspires others.",
            "Travel or foreign connections bring opportunities. Embrace different cultures and perspectives.",
            "Teaching and sharing knowledge fulfill your purpose. Your wisdom helps others grow.",
        ],
        ZodiacSign::Capricorn => &[
            "Hard work and determination lead to achievement. Your persistent efforts finally pay off.",
            "Traditional approaches prove most effective. Stick to tried and tested methods today.",
            "Career advancement is highlighted. Your professional reputation opens new doors.",
            "Responsibility and maturity earn respect. Others look to you for guidance and stability.",
            "Long-term planning yields concrete results. Your patient strategy builds lasting success.",
        ],
        ZodiacSign::Aquarius => &[
            "Innovation and original thinking set you apart. Your unique perspective offers solutions.",
            "Humanitarian causes capture your attention. Make a positive difference in your community.",
            "Technology and progress facilitate your goals. Embrace modern tools and methods.",
            "Friendship and group activities bring joy. Connect with like-minded individuals today.",
            "Independence and freedom guide your choices. March to the beat of your own drum.",
        ],
        ZodiacSign::Pisces => &[
            "Intuition and imagination flow freely today. Trust your creative and psychic abilities.",
            "Compassion and empathy strengthen bonds. Your understanding nature heals and comforts.",
            "Artistic pursuits bring deep satisfaction. Express your emotions through creative outlets.",
            "Spiritual insights guide your journey. Meditation and reflection reveal inner truths.",
            "Dreams and visions hold important messages. Pay attention to symbolic communications.",
        ],
    }
}

pub fn affirmation(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "I embrace my natural leadership with courage and confidence.",
        ZodiacSign::Taurus => "I find beauty and stability in every moment of my day.",
        ZodiacSign::Gemini => "I communicate with clarity and connect meaningfully with others.",
        ZodiacSign::Cancer => "I nurture myself and others with love and compassion.",
        ZodiacSign::Leo => "I shine my light brightly and inspire those around me.",
        ZodiacSign::Virgo => "I approach each task with precision and dedication.",
        ZodiacSign::Libra => "I create harmony and balance in all my relationships.",
        ZodiacSign::Scorpio => "I transform challenges into opportunities for growth.",
        ZodiacSign::Sagittarius => "I explore life with optimism and boundless curiosity.",
        ZodiacSign::Capricorn => "I build my dreams with patience and determination.",
        ZodiacSign::Aquarius => "I embrace my uniqueness and contribute to positive change.",
        ZodiacSign::Pisces => "I trust my intuition and express my creativity freely.",
    }
}

pub fn lucky_base(sign: ZodiacSign) -> [u32; 4] {
    match sign {
        ZodiacSign::Aries => [3, 9, 21, 27],
        ZodiacSign::Taurus => [2, 6, 15, 24],
        ZodiacSign::Gemini => [5, 7, 14, 23],
        ZodiacSign::Cancer => [2, 7, 11, 16],
        ZodiacSign::Leo => [1, 8, 19, 28],
        ZodiacSign::Virgo => [6, 14, 18, 29],
        ZodiacSign::Libra => [6, 15, 24, 33],
        ZodiacSign::Scorpio => [4, 13, 18, 27],
        ZodiacSign::Sagittarius => [3, 9, 21, 30],
        ZodiacSign::Capricorn => [8, 10, 19, 26],
        ZodiacSign::Aquarius => [4, 11, 22, 29],
        ZodiacSign::Pisces => [7, 12, 16, 25],
    }
}
